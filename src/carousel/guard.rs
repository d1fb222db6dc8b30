//! At-most-one-in-flight transition gate.

use std::time::{Duration, Instant};

/// Identifier of an accepted transition, unique per carousel instance.
pub type TransitionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Idle,
    Transitioning { id: TransitionId, since: Instant },
}

/// True exactly while an enter/exit animation pair is in flight.
#[derive(Debug, Clone)]
pub struct TransitionGuard {
    state: GuardState,
}

impl TransitionGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Idle,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self.state, GuardState::Transitioning { .. })
    }

    pub fn in_flight(&self) -> Option<TransitionId> {
        match self.state {
            GuardState::Idle => None,
            GuardState::Transitioning { id, .. } => Some(id),
        }
    }

    /// Engage for `id`. Returns false (and changes nothing) when already engaged.
    pub fn engage(&mut self, id: TransitionId, now: Instant) -> bool {
        if self.is_engaged() {
            return false;
        }
        self.state = GuardState::Transitioning { id, since: now };
        true
    }

    /// Release if `id` is the transition in flight.
    pub fn release(&mut self, id: TransitionId) -> bool {
        match self.state {
            GuardState::Transitioning { id: current, .. } if current == id => {
                self.state = GuardState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Release a transition that has been in flight for at least `timeout`.
    pub fn release_expired(&mut self, now: Instant, timeout: Duration) -> Option<TransitionId> {
        match self.state {
            GuardState::Transitioning { id, since }
                if now.saturating_duration_since(since) >= timeout =>
            {
                self.state = GuardState::Idle;
                Some(id)
            }
            _ => None,
        }
    }
}

impl Default for TransitionGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engage_then_release() {
        let mut guard = TransitionGuard::new();
        let now = Instant::now();
        assert!(guard.engage(1, now));
        assert!(guard.is_engaged());
        assert!(!guard.engage(2, now));
        assert_eq!(guard.in_flight(), Some(1));
        assert!(guard.release(1));
        assert!(!guard.is_engaged());
    }

    #[test]
    fn mismatched_release_is_ignored() {
        let mut guard = TransitionGuard::new();
        guard.engage(7, Instant::now());
        assert!(!guard.release(6));
        assert_eq!(guard.in_flight(), Some(7));
    }

    #[test]
    fn release_expired_respects_timeout() {
        let mut guard = TransitionGuard::new();
        let start = Instant::now();
        guard.engage(3, start);

        let timeout = Duration::from_millis(500);
        assert_eq!(
            guard.release_expired(start + Duration::from_millis(499), timeout),
            None
        );
        assert_eq!(
            guard.release_expired(start + Duration::from_millis(500), timeout),
            Some(3)
        );
        assert!(!guard.is_engaged());
    }
}
