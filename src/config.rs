//! User settings loaded from TOML.
//!
//! Every field has a default, so an absent file or an absent section simply yields the
//! built-in behavior. The default location is `<config dir>/showcase/config.toml`.

use crate::error::{Result, ShowcaseError};
use crate::render::animation::transition_duration;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Swipe confidence threshold applied to `|offset| * velocity`.
pub const DEFAULT_SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;
/// Offset beyond which a drag navigates without velocity data.
pub const DEFAULT_SWIPE_OFFSET_THRESHOLD: f64 = 100.0;
/// Swipe units covered by one terminal column.
pub const DEFAULT_UNITS_PER_COLUMN: f64 = 8.0;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub swipe: SwipeSettings,
    pub animation: AnimationSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub confidence_threshold: f64,
    pub offset_threshold: f64,
    pub units_per_column: f64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_SWIPE_CONFIDENCE_THRESHOLD,
            offset_threshold: DEFAULT_SWIPE_OFFSET_THRESHOLD,
            units_per_column: DEFAULT_UNITS_PER_COLUMN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub stiffness: f64,
    pub damping: f64,
    pub fade_ms: u64,
    pub frame_ms: u64,
    /// Force-release a transition guard stuck longer than this. Must exceed the
    /// transition length. Unset keeps a stuck guard stuck.
    pub guard_timeout_ms: Option<u64>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            fade_ms: 200,
            frame_ms: 16,
            guard_timeout_ms: None,
        }
    }
}

impl AnimationSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    pub fn guard_timeout(&self) -> Option<Duration> {
        self.guard_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: String,
    pub assets_dir: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            assets_dir: None,
        }
    }
}

impl Settings {
    /// Default settings file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("showcase").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| ShowcaseError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShowcaseError::file_error(format!("reading {}", path.display()), e))?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the explicit path when given, else from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ShowcaseError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        let swipe = &self.swipe;
        if swipe.confidence_threshold <= 0.0 || swipe.offset_threshold <= 0.0 {
            return Err(ShowcaseError::config("swipe thresholds must be positive"));
        }
        if swipe.units_per_column <= 0.0 {
            return Err(ShowcaseError::config("units_per_column must be positive"));
        }
        if self.animation.stiffness <= 0.0 || self.animation.damping < 0.0 {
            return Err(ShowcaseError::config(
                "spring stiffness must be positive and damping non-negative",
            ));
        }
        if let Some(timeout) = self.animation.guard_timeout() {
            let transition = transition_duration(&self.animation);
            if timeout <= transition {
                return Err(ShowcaseError::config(format!(
                    "guard_timeout_ms ({} ms) must exceed the transition length ({} ms)",
                    timeout.as_millis(),
                    transition.as_millis()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gallery_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.swipe.confidence_threshold, 10_000.0);
        assert_eq!(settings.swipe.offset_threshold, 100.0);
        assert_eq!(settings.animation.stiffness, 300.0);
        assert_eq!(settings.animation.damping, 30.0);
        assert_eq!(settings.animation.guard_timeout(), None);
        assert_eq!(settings.ui.theme, "default");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [animation]
            guard_timeout_ms = 1500

            [ui]
            theme = "monochrome"
            "#,
        )
        .unwrap();

        assert_eq!(
            settings.animation.guard_timeout(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(settings.animation.fade_ms, 200);
        assert_eq!(settings.ui.theme, "monochrome");
        assert_eq!(settings.swipe, SwipeSettings::default());
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let err = Settings::from_toml_str("[swipe]\nconfidence_threshold = 0.0").unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigError { .. }));
    }

    #[test]
    fn guard_timeout_must_outlast_the_transition() {
        let err = Settings::from_toml_str("[animation]\nguard_timeout_ms = 1").unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigError { .. }));
        assert!(err.to_string().contains("guard_timeout_ms (1 ms)"));

        let length = transition_duration(&AnimationSettings::default());
        let exact = format!("[animation]\nguard_timeout_ms = {}", length.as_millis());
        assert!(Settings::from_toml_str(&exact).is_err());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Settings::from_toml_str("[swipe\n").unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigError { .. }));
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ShowcaseError::FileNotFound { .. }));
    }

    #[test]
    fn frame_interval_never_zero() {
        let mut animation = AnimationSettings::default();
        animation.frame_ms = 0;
        assert_eq!(animation.frame_interval(), Duration::from_millis(1));
    }
}
