//! Rendering subsystem.
//!
//! Hosts the render loop state, the transition protocol shared with the carousel, the slide
//! animation timeline, and the terminal UI.

pub mod animation;
pub mod protocol;
pub mod service;
pub mod ui;

pub use animation::{transition_duration, AnimationFrame, SlideAnimation, Spring};
pub use protocol::{HitTarget, TransitionMessage};
pub use service::RenderLoopState;
