//! Resolution of slide image references.
//!
//! The carousel treats `image_ref` as opaque. Whether an asset exists is the loader's
//! business; the presentation layer only shows what the loader reports.

use std::path::{Path, PathBuf};

/// What a loader found for an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Available { path: PathBuf, bytes: u64 },
    Missing { path: PathBuf },
    /// No loader root configured; the reference is shown as-is.
    Unresolved,
}

impl AssetStatus {
    pub fn describe(&self) -> String {
        match self {
            AssetStatus::Available { path, bytes } => {
                format!("{} ({})", path.display(), format_size(*bytes))
            }
            AssetStatus::Missing { path } => format!("{} (missing)", path.display()),
            AssetStatus::Unresolved => String::new(),
        }
    }
}

pub trait ResourceLoader: Send + Sync {
    fn resolve(&self, image_ref: &str) -> AssetStatus;
}

/// Resolves references relative to a directory on disk. Leading `/` in a reference is
/// taken relative to the root, the way a web server would serve it.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ResourceLoader for FsResourceLoader {
    fn resolve(&self, image_ref: &str) -> AssetStatus {
        let path = self.root.join(image_ref.trim_start_matches('/'));
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => AssetStatus::Available {
                path,
                bytes: meta.len(),
            },
            _ => {
                log::warn!("asset {} not found under {}", image_ref, self.root.display());
                AssetStatus::Missing { path }
            }
        }
    }
}

/// Loader used when no asset directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedLoader;

impl ResourceLoader for UnresolvedLoader {
    fn resolve(&self, _image_ref: &str) -> AssetStatus {
        AssetStatus::Unresolved
    }
}

fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_existing_asset_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("certificates")).unwrap();
        std::fs::write(dir.path().join("certificates/edx.jpg"), vec![0u8; 2048]).unwrap();

        let loader = FsResourceLoader::new(dir.path());
        match loader.resolve("/certificates/edx.jpg") {
            AssetStatus::Available { path, bytes } => {
                assert_eq!(path, dir.path().join("certificates/edx.jpg"));
                assert_eq!(bytes, 2048);
            }
            other => panic!("expected available asset, got {other:?}"),
        }
    }

    #[test]
    fn missing_asset_is_reported_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FsResourceLoader::new(dir.path());
        let status = loader.resolve("/certificates/nope.jpg");
        assert!(matches!(status, AssetStatus::Missing { .. }));
        assert!(status.describe().ends_with("(missing)"));
    }

    #[test]
    fn unresolved_loader_describes_nothing() {
        assert_eq!(UnresolvedLoader.resolve("x.jpg"), AssetStatus::Unresolved);
        assert_eq!(AssetStatus::Unresolved.describe(), "");
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
