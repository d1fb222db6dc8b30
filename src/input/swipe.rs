//! Drag tracking and swipe heuristics.
//!
//! A drag is measured in terminal columns and converted to swipe units on evaluation.
//! Two independent rules decide navigation on release:
//!
//! - velocity rule: `swipe_power = |offset| * velocity`; below `-confidence_threshold`
//!   moves forward, above `confidence_threshold` moves backward.
//! - offset rule: an offset beyond `offset_threshold` moves against the drag direction,
//!   for pointers that cannot report a usable velocity.
//!
//! Both rules are evaluated on every release and dispatched as separate guarded calls.

use crate::config::SwipeSettings;
use std::time::{Duration, Instant};

/// Only samples this recent contribute to the release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// A finished pointer drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub start_column: u16,
    pub start_row: u16,
    /// Horizontal displacement in columns (negative = leftward).
    pub offset_columns: f64,
    /// Release velocity in columns per second, if measurable.
    pub velocity_columns: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    column: u16,
    at: Instant,
}

/// Accumulates pointer samples between press and release.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<(u16, u16)>,
    moved: bool,
    samples: Vec<Sample>,
}

/// What a pointer release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerRelease {
    Click { column: u16, row: u16 },
    Drag(DragGesture),
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, column: u16, row: u16, now: Instant) {
        self.start = Some((column, row));
        self.moved = false;
        self.samples.clear();
        self.samples.push(Sample { column, at: now });
    }

    /// Record a drag sample. Samples older than the velocity window are discarded.
    pub fn drag(&mut self, column: u16, now: Instant) {
        let Some((start_column, _)) = self.start else {
            return;
        };
        self.moved |= column != start_column;
        self.samples.push(Sample { column, at: now });
        self.samples
            .retain(|s| now.saturating_duration_since(s.at) <= VELOCITY_WINDOW);
    }

    /// Finish the gesture. Returns `None` when no press was seen.
    pub fn release(&mut self, column: u16, row: u16, now: Instant) -> Option<PointerRelease> {
        let (start_column, start_row) = self.start.take()?;
        let moved = std::mem::take(&mut self.moved) || column != start_column;
        if !moved {
            self.samples.clear();
            return Some(PointerRelease::Click { column, row });
        }

        if self.samples.last().map(|s| s.column) != Some(column) {
            self.samples.push(Sample { column, at: now });
        }

        let offset_columns = f64::from(column) - f64::from(start_column);
        let velocity_columns = self.release_velocity(now);
        self.samples.clear();

        Some(PointerRelease::Drag(DragGesture {
            start_column,
            start_row,
            offset_columns,
            velocity_columns,
        }))
    }

    fn release_velocity(&self, now: Instant) -> Option<f64> {
        let last = self.samples.last()?;
        let first = self
            .samples
            .iter()
            .find(|s| now.saturating_duration_since(s.at) <= VELOCITY_WINDOW)?;

        let elapsed = last.at.saturating_duration_since(first.at).as_secs_f64();
        if elapsed <= 0.0 {
            return None;
        }
        Some((f64::from(last.column) - f64::from(first.column)) / elapsed)
    }
}

/// Navigation deltas produced by each rule; `None` means the rule did not fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeDecision {
    pub by_velocity: Option<i64>,
    pub by_offset: Option<i64>,
}

impl SwipeDecision {
    /// Deltas in dispatch order.
    pub fn deltas(&self) -> impl Iterator<Item = i64> {
        self.by_velocity.into_iter().chain(self.by_offset)
    }
}

/// `|offset| * velocity`.
pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity
}

/// Applies both swipe rules to a gesture.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    settings: SwipeSettings,
}

impl SwipeDetector {
    pub fn new(settings: SwipeSettings) -> Self {
        Self { settings }
    }

    /// Evaluate offset/velocity already expressed in swipe units.
    pub fn decide(&self, offset: f64, velocity: Option<f64>) -> SwipeDecision {
        let threshold = self.settings.confidence_threshold;
        let by_velocity = velocity.and_then(|velocity| {
            let power = swipe_power(offset, velocity);
            if power < -threshold {
                Some(1)
            } else if power > threshold {
                Some(-1)
            } else {
                None
            }
        });

        let limit = self.settings.offset_threshold;
        let by_offset = if offset > limit {
            Some(-1)
        } else if offset < -limit {
            Some(1)
        } else {
            None
        };

        SwipeDecision {
            by_velocity,
            by_offset,
        }
    }

    /// Evaluate a terminal drag, converting columns to swipe units.
    pub fn evaluate(&self, gesture: &DragGesture) -> SwipeDecision {
        let scale = self.settings.units_per_column;
        self.decide(
            gesture.offset_columns * scale,
            gesture.velocity_columns.map(|v| v * scale),
        )
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeSettings::default())
    }
}
