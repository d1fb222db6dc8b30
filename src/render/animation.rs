//! Slide transition timeline.
//!
//! Positions are in travel units where a full slide width is [`TRAVEL`]. The outgoing
//! slide springs from 0 to `-direction * TRAVEL`, the incoming one from
//! `direction * TRAVEL` to 0, while opacities cross-fade linearly. The exit is complete
//! once the spring has come to rest and the fade has finished.

use crate::carousel::{Transition, TransitionId};
use crate::config::AnimationSettings;
use std::time::Duration;

/// Distance a slide travels on entry or exit.
pub const TRAVEL: f64 = 1000.0;
/// Displacement below which the spring counts as at rest.
const REST_DELTA: f64 = 0.5;
/// Speed (units/s) below which the spring counts as at rest.
const REST_SPEED: f64 = 10.0;
/// Upper bound on the settle search.
const MAX_SETTLE: Duration = Duration::from_secs(5);
const SETTLE_STEP: Duration = Duration::from_millis(1);

/// Damped harmonic oscillator released from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Displacement and velocity at `t` seconds for an initial displacement `x0`.
    pub fn state_at(&self, x0: f64, t: f64) -> (f64, f64) {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * x0 * (cos + (zeta * omega / omega_d) * sin);
            let v = -decay * x0 * (omega * omega / omega_d) * sin;
            (x, v)
        } else if zeta == 1.0 {
            let decay = (-omega * t).exp();
            (x0 * (1.0 + omega * t) * decay, -x0 * omega * omega * t * decay)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let a = x0 * r2 / (r2 - r1);
            let b = -x0 * r1 / (r2 - r1);
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }

    /// First time at which a release from `x0` is within the rest thresholds.
    pub fn settle_time(&self, x0: f64) -> Duration {
        let mut t = Duration::ZERO;
        while t < MAX_SETTLE {
            let (x, v) = self.state_at(x0, t.as_secs_f64());
            if x.abs() < REST_DELTA && v.abs() < REST_SPEED {
                return t;
            }
            t += SETTLE_STEP;
        }
        MAX_SETTLE
    }
}

/// Snapshot of both slides at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Horizontal shift as a fraction of the slide width.
    pub exit_shift: f64,
    pub enter_shift: f64,
    pub exit_opacity: f64,
    pub enter_opacity: f64,
}

impl AnimationFrame {
    pub const SETTLED: AnimationFrame = AnimationFrame {
        exit_shift: 0.0,
        enter_shift: 0.0,
        exit_opacity: 0.0,
        enter_opacity: 1.0,
    };
}

/// Time from acceptance until the outgoing slide has settled and faded out.
pub fn transition_duration(settings: &AnimationSettings) -> Duration {
    let spring = Spring::new(settings.stiffness, settings.damping);
    spring
        .settle_time(TRAVEL)
        .max(Duration::from_millis(settings.fade_ms))
}

/// Timeline of one accepted transition.
#[derive(Debug, Clone)]
pub struct SlideAnimation {
    transition: Transition,
    spring: Spring,
    fade: Duration,
    duration: Duration,
    elapsed: Duration,
    exit_reported: bool,
}

impl SlideAnimation {
    pub fn new(transition: Transition, settings: &AnimationSettings) -> Self {
        Self {
            transition,
            spring: Spring::new(settings.stiffness, settings.damping),
            fade: Duration::from_millis(settings.fade_ms),
            duration: transition_duration(settings),
            elapsed: Duration::ZERO,
            exit_reported: false,
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn id(&self) -> TransitionId {
        self.transition.id
    }

    /// Total time until the outgoing slide has left.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_exit_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance the clock. Returns the transition id exactly once, on the step where the
    /// exit completes.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionId> {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_exit_complete() && !self.exit_reported {
            self.exit_reported = true;
            return Some(self.transition.id);
        }
        None
    }

    pub fn frame(&self) -> AnimationFrame {
        if self.is_exit_complete() {
            return AnimationFrame::SETTLED;
        }

        let sign = self.transition.direction.sign() as f64;
        let (remaining, _) = self.spring.state_at(1.0, self.elapsed.as_secs_f64());
        let fade = if self.fade.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.fade.as_secs_f64()).min(1.0)
        };

        AnimationFrame {
            exit_shift: -sign * (1.0 - remaining),
            enter_shift: sign * remaining,
            exit_opacity: 1.0 - fade,
            enter_opacity: fade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Direction;

    fn transition(direction: Direction) -> Transition {
        Transition {
            id: 9,
            from_index: 0,
            to_index: 1,
            page: 1,
            direction,
        }
    }

    #[test]
    fn spring_starts_at_rest_displacement() {
        let spring = Spring::new(300.0, 30.0);
        let (x, v) = spring.state_at(TRAVEL, 0.0);
        assert!((x - TRAVEL).abs() < 1e-9);
        assert!(v.abs() < 1e-9);
    }

    #[test]
    fn spring_decays_in_every_damping_regime() {
        for spring in [
            Spring::new(300.0, 30.0),
            Spring::new(100.0, 20.0),
            Spring::new(100.0, 30.0),
        ] {
            let (x, _) = spring.state_at(TRAVEL, 3.0);
            assert!(x.abs() < REST_DELTA, "{spring:?} still at {x}");
        }
    }

    #[test]
    fn gallery_spring_settles_in_about_half_a_second() {
        let settle = Spring::new(300.0, 30.0).settle_time(TRAVEL);
        assert!(settle > Duration::from_millis(300), "{settle:?}");
        assert!(settle < Duration::from_millis(900), "{settle:?}");
    }

    #[test]
    fn reports_exit_exactly_once() {
        let mut animation = SlideAnimation::new(
            transition(Direction::Forward),
            &AnimationSettings::default(),
        );
        assert_eq!(animation.advance(Duration::from_millis(100)), None);
        assert!(!animation.is_exit_complete());
        assert_eq!(animation.advance(animation.duration()), Some(9));
        assert_eq!(animation.advance(Duration::from_millis(16)), None);
        assert_eq!(animation.frame(), AnimationFrame::SETTLED);
    }

    #[test]
    fn forward_exit_moves_left_and_entry_comes_from_right() {
        let mut animation = SlideAnimation::new(
            transition(Direction::Forward),
            &AnimationSettings::default(),
        );
        animation.advance(Duration::from_millis(50));
        let frame = animation.frame();
        assert!(frame.exit_shift < 0.0);
        assert!(frame.enter_shift > 0.0);
        assert!(frame.exit_opacity < 1.0 && frame.exit_opacity > 0.0);
        assert!((frame.exit_opacity + frame.enter_opacity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn backward_mirrors_forward() {
        let mut forward = SlideAnimation::new(
            transition(Direction::Forward),
            &AnimationSettings::default(),
        );
        let mut backward = SlideAnimation::new(
            transition(Direction::Backward),
            &AnimationSettings::default(),
        );
        forward.advance(Duration::from_millis(80));
        backward.advance(Duration::from_millis(80));
        assert!((forward.frame().exit_shift + backward.frame().exit_shift).abs() < 1e-9);
        assert!((forward.frame().enter_shift + backward.frame().enter_shift).abs() < 1e-9);
    }

    #[test]
    fn fade_bounds_duration() {
        let settings = AnimationSettings {
            stiffness: 5000.0,
            damping: 200.0,
            fade_ms: 2000,
            ..AnimationSettings::default()
        };
        let animation = SlideAnimation::new(transition(Direction::Forward), &settings);
        assert_eq!(animation.duration(), Duration::from_millis(2000));
    }
}
