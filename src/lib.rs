//! # showcase - Terminal Certificate Carousel
//!
//! A circular slide carousel for the terminal, presenting a portfolio's certificates one at
//! a time with animated transitions.
//!
//! ## Features
//!
//! - **Circular paging**: an unbounded page counter mapped onto the deck by modulo
//! - **Transition gate**: at most one transition in flight; requests during it are dropped
//! - **Three input modes**: arrow keys, mouse drag swipes, and clickable progress dots
//! - **Spring animation**: outgoing and incoming slides slide and cross-fade
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`deck`] - Slide records and deck loading
//! - [`carousel`] - Pagination state machine and transition guard
//! - [`input`] - Terminal input collection, keyboard mapping and swipe heuristics
//! - [`render`] - Render loop, transition protocol, animation and terminal UI
//! - [`assets`] - Image reference resolution
//! - [`config`] - User settings
//! - [`app`] - Application core and component coordination

// Core modules
pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;

// Subsystems
pub mod assets;
pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, ShowcaseError};

// Public API surface for external usage
pub use app::Application;
pub use carousel::{Carousel, Direction, NavOutcome, Transition};
pub use config::Settings;
pub use deck::{Slide, SlideDeck};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
