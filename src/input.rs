//! Input subsystem.
//!
//! Raw terminal events are collected on a dedicated thread, folded into clicks and drag
//! gestures, and mapped to carousel-level actions.

pub mod raw;
pub mod service;
pub mod swipe;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use service::{spawn_input_thread, InputAction, InputService, KeyMap};
pub use swipe::{swipe_power, DragGesture, SwipeDecision, SwipeDetector};
