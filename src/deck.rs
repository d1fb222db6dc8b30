//! Slide deck: the fixed, ordered set of slides a carousel pages through.
//!
//! A deck is immutable once built. It can come from the built-in certificate list or
//! from a TOML file of `[[slides]]` tables.

use crate::error::{Result, ShowcaseError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One displayable item: an image reference plus its caption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    /// Opaque resource locator, resolved by a [`crate::assets::ResourceLoader`].
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl Slide {
    pub fn new(id: u32, title: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_ref: image_ref.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    slides: Vec<Slide>,
}

/// Non-empty ordered slides with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck, rejecting empty input and duplicate ids.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(ShowcaseError::invalid_deck("deck has no slides"));
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(ShowcaseError::invalid_deck(format!(
                    "duplicate slide id {}",
                    slide.id
                )));
            }
        }

        Ok(Self { slides })
    }

    /// The certificates shown by the portfolio gallery.
    pub fn certifications() -> Self {
        Self {
            slides: vec![
                Slide::new(1, "AWS and DevOps Certification", "/certificates/AD_VI.jpg"),
                Slide::new(
                    2,
                    "AI & Machine Learning Certification",
                    "/certificates/AIML_VI.jpg",
                ),
                Slide::new(3, "Cloud Computing - Excelr", "/certificates/Excelr.jpg"),
                Slide::new(4, "edX Course Certification", "/certificates/edx.jpg"),
                Slide::new(5, "FreeCodeCamp Certification I", "/certificates/fcc_1.jpg"),
                Slide::new(6, "FreeCodeCamp Certification II", "/certificates/fcc_2.jpg"),
            ],
        }
    }

    /// Parse a deck from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DeckFile = toml::from_str(content)
            .map_err(|e| ShowcaseError::invalid_deck(format!("malformed deck file: {}", e)))?;
        Self::new(file.slides)
    }

    /// Load a deck from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShowcaseError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShowcaseError::file_error(format!("reading {}", path.display()), e))?;
        let deck = Self::from_toml_str(&content)?;
        log::info!("loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::certifications()
    }
}
