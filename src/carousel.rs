//! Circular slide carousel state machine.
//!
//! The carousel has two states. It is `Idle` while the transition guard is released and
//! `Transitioning` while an accepted navigation is still animating. Navigation requests
//! received while transitioning are dropped, never queued. The presentation layer ends a
//! transition by reporting the exit of the outgoing slide through
//! [`Carousel::on_exit_complete`].

pub mod guard;
pub mod pagination;

pub use guard::{TransitionGuard, TransitionId};
pub use pagination::{wrap_index, Direction, PaginationState};

use crate::deck::{Slide, SlideDeck};
use crate::error::{Result, ShowcaseError};
use std::time::{Duration, Instant};

/// An accepted navigation, handed to the presentation layer to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: TransitionId,
    pub from_index: usize,
    pub to_index: usize,
    pub page: i64,
    pub direction: Direction,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Accepted(Transition),
    /// A transition was in flight; the request was discarded.
    Dropped,
    /// Zero-length move; nothing to animate.
    Ignored,
}

impl NavOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, NavOutcome::Accepted(_))
    }

    pub fn transition(&self) -> Option<Transition> {
        match self {
            NavOutcome::Accepted(transition) => Some(*transition),
            _ => None,
        }
    }
}

/// One mounted carousel. Each instance owns its state exclusively.
#[derive(Debug, Clone)]
pub struct Carousel {
    deck: SlideDeck,
    state: PaginationState,
    guard: TransitionGuard,
    next_transition_id: TransitionId,
}

impl Carousel {
    pub fn new(deck: SlideDeck) -> Self {
        Self {
            deck,
            state: PaginationState::new(),
            guard: TransitionGuard::new(),
            next_transition_id: 1,
        }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn page(&self) -> i64 {
        self.state.page
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.guard.is_engaged()
    }

    pub fn in_flight(&self) -> Option<TransitionId> {
        self.guard.in_flight()
    }

    /// Index of the displayed slide, always in `[0, len)`.
    pub fn current_index(&self) -> usize {
        self.state.index(self.deck.len())
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides()[self.current_index()]
    }

    /// Move by `delta` pages.
    pub fn paginate(&mut self, delta: i64) -> NavOutcome {
        if self.guard.is_engaged() {
            log::debug!("paginate({delta}) dropped: transition in flight");
            return NavOutcome::Dropped;
        }
        let Some(direction) = Direction::from_delta(delta) else {
            return NavOutcome::Ignored;
        };
        let next = self.state.advanced(delta, direction);
        self.commit(next)
    }

    /// Jump straight to slide `target`.
    pub fn go_to(&mut self, target: usize) -> Result<NavOutcome> {
        let len = self.deck.len();
        if target >= len {
            return Err(ShowcaseError::invalid_argument(format!(
                "slide index {target} out of range for {len} slides"
            )));
        }
        if self.guard.is_engaged() {
            log::debug!("go_to({target}) dropped: transition in flight");
            return Ok(NavOutcome::Dropped);
        }

        let direction = if target >= self.current_index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.commit(PaginationState::jumped(target as i64, direction)))
    }

    /// Exit animation of transition `id` finished. Returns whether the guard was released.
    pub fn on_exit_complete(&mut self, id: TransitionId) -> bool {
        let released = self.guard.release(id);
        if !released {
            log::debug!(
                "ignoring exit completion for transition {id}; in flight: {:?}",
                self.guard.in_flight()
            );
        }
        released
    }

    /// Force-release a guard that has been engaged for at least `timeout`.
    pub fn release_if_stuck(&mut self, now: Instant, timeout: Duration) -> Option<TransitionId> {
        let released = self.guard.release_expired(now, timeout);
        if let Some(id) = released {
            log::warn!("transition {id} never completed; guard released after {timeout:?}");
        }
        released
    }

    fn commit(&mut self, next: PaginationState) -> NavOutcome {
        let id = self.next_transition_id;
        let from_index = self.current_index();

        let engaged = self.guard.engage(id, Instant::now());
        debug_assert!(engaged, "commit called with transition in flight");
        self.next_transition_id += 1;
        self.state = next;

        let transition = Transition {
            id,
            from_index,
            to_index: self.current_index(),
            page: next.page,
            direction: next.direction,
        };
        log::debug!("transition accepted: {transition:?}");
        NavOutcome::Accepted(transition)
    }
}
