//! showcase - Terminal Certificate Carousel
//!
//! Pages through a deck of certificates with arrow keys, mouse swipes and clickable dots.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use showcase::assets::{FsResourceLoader, ResourceLoader, UnresolvedLoader};
use showcase::render::ui::{ColorTheme, TerminalUI};
use showcase::{Application, Settings, SlideDeck};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG controls verbosity)
    env_logger::init();

    let matches = Command::new("showcase")
        .version(showcase::VERSION)
        .about("A terminal certificate carousel")
        .long_about(
            "showcase presents a deck of certificates as a circular carousel. Use the arrow \
             keys, drag the slide with the mouse, or click the progress dots to navigate.",
        )
        .arg(
            Arg::new("deck")
                .long("deck")
                .value_name("FILE")
                .help("TOML file with [[slides]] entries (defaults to the built-in certificates)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Settings file (defaults to <config dir>/showcase/config.toml)"),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .value_name("DIR")
                .help("Directory that image references are resolved against"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .value_parser(["default", "monochrome", "high-contrast"])
                .help("Color theme"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref()).context("loading settings")?;

    let deck = match matches.get_one::<String>("deck") {
        Some(path) => SlideDeck::load(&PathBuf::from(path)).context("loading slide deck")?,
        None => SlideDeck::certifications(),
    };

    let theme_name = matches
        .get_one::<String>("theme")
        .cloned()
        .unwrap_or_else(|| settings.ui.theme.clone());
    let theme = ColorTheme::from_name(&theme_name)
        .with_context(|| format!("unknown theme: {theme_name}"))?;

    let assets_dir = matches
        .get_one::<String>("assets")
        .map(PathBuf::from)
        .or_else(|| settings.ui.assets_dir.clone());
    let loader: Box<dyn ResourceLoader> = match assets_dir {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Asset path is not a directory: {}", dir.display());
            }
            Box::new(FsResourceLoader::new(dir))
        }
        None => Box::new(UnresolvedLoader),
    };

    let ui_renderer = Box::new(TerminalUI::with_theme(theme)?);
    let mut app = Application::new(deck, settings, loader.as_ref(), ui_renderer)?;

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        assert!(!showcase::VERSION.is_empty());
    }
}
