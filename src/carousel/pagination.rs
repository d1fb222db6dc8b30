//! Logical page tracking.
//!
//! `page` is an unbounded signed counter. It is never reduced internally; the displayed
//! slide is derived from it with a non-negative modulo.

/// Sign of the last navigation, used only to pick the slide-in side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction for a nonzero delta; `None` for zero.
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta.signum() {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Backward),
            _ => None,
        }
    }

    /// +1 for forward, -1 for backward.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Page and direction, always replaced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub page: i64,
    pub direction: Direction,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after moving by `delta` pages. Saturates at the `i64` bounds.
    pub fn advanced(self, delta: i64, direction: Direction) -> Self {
        Self {
            page: self.page.saturating_add(delta),
            direction,
        }
    }

    /// State after jumping straight to `page`.
    pub fn jumped(page: i64, direction: Direction) -> Self {
        Self { page, direction }
    }

    /// Slide index displayed for this page in a deck of `len` slides.
    pub fn index(&self, len: usize) -> usize {
        wrap_index(self.page, len)
    }
}

/// `((page % len) + len) % len`, never negative.
///
/// # Panics
///
/// Panics if `len` is zero. Decks are non-empty by construction.
pub fn wrap_index(page: i64, len: usize) -> usize {
    page.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_from_delta() {
        assert_eq!(Direction::from_delta(1), Some(Direction::Forward));
        assert_eq!(Direction::from_delta(5), Some(Direction::Forward));
        assert_eq!(Direction::from_delta(-3), Some(Direction::Backward));
        assert_eq!(Direction::from_delta(0), None);
    }

    #[test]
    fn wrap_index_handles_negative_pages() {
        assert_eq!(wrap_index(-1, 6), 5);
        assert_eq!(wrap_index(-6, 6), 0);
        assert_eq!(wrap_index(-7, 6), 5);
        assert_eq!(wrap_index(7, 6), 1);
        assert_eq!(wrap_index(i64::MIN, 6), i64::MIN.rem_euclid(6) as usize);
    }

    #[test]
    fn advanced_saturates() {
        let state = PaginationState::jumped(i64::MAX, Direction::Forward);
        assert_eq!(state.advanced(1, Direction::Forward).page, i64::MAX);
    }

    proptest! {
        #[test]
        fn wrap_index_matches_double_modulo(page in any::<i64>(), len in 1usize..64) {
            let n = len as i128;
            let expected = (((page as i128 % n) + n) % n) as usize;
            let index = wrap_index(page, len);
            prop_assert_eq!(index, expected);
            prop_assert!(index < len);
        }
    }
}
