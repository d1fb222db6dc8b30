//! Messages exchanged between the carousel and the presentation layer.
//!
//! A transition is a two-phase exchange: the carousel accepts a navigation and requests an
//! animation for it, and the presentation layer answers once the outgoing slide has left.

use crate::carousel::{Transition, TransitionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionMessage {
    /// Carousel to presentation: animate this accepted navigation.
    RequestTransition(Transition),
    /// Presentation to carousel: the exit animation of this transition finished.
    AnimationComplete(TransitionId),
}

/// Interactive regions of the carousel screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PreviousButton,
    NextButton,
    Dot(usize),
    Slide,
}
