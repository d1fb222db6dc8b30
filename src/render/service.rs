//! Render coordination.
//!
//! `RenderLoopState` owns the mounted carousel and mediates between input actions, the
//! transition protocol and view snapshots. Every mutation of carousel state happens here,
//! on the render loop, in the order actions arrive.

use crate::assets::{AssetStatus, ResourceLoader};
use crate::carousel::{Carousel, NavOutcome};
use crate::config::Settings;
use crate::input::{DragGesture, InputAction, SwipeDetector};
use crate::render::animation::SlideAnimation;
use crate::render::protocol::{HitTarget, TransitionMessage};
use crate::render::ui::layout::CarouselLayout;
use crate::render::ui::state::{SlideView, StatusLine, ViewState};
use std::time::{Duration, Instant};

/// Tracks render-related state that must persist across input actions and frames.
pub struct RenderLoopState {
    carousel: Carousel,
    settings: Settings,
    swipe: SwipeDetector,
    assets: Vec<AssetStatus>,
    animation: Option<SlideAnimation>,
    layout: CarouselLayout,
    viewport: (u16, u16),
    status_line: StatusLine,
}

impl RenderLoopState {
    pub fn new(
        carousel: Carousel,
        settings: Settings,
        loader: &dyn ResourceLoader,
        viewport: (u16, u16),
    ) -> Self {
        let assets = carousel
            .deck()
            .slides()
            .iter()
            .map(|slide| loader.resolve(&slide.image_ref))
            .collect();
        let swipe = SwipeDetector::new(settings.swipe.clone());

        Self {
            carousel,
            swipe,
            settings,
            assets,
            animation: None,
            layout: CarouselLayout::compute(viewport.0, viewport.1),
            viewport,
            status_line: StatusLine::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn animation(&self) -> Option<&SlideAnimation> {
        self.animation.as_ref()
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Apply one input action. Returns false when the application should quit.
    pub fn process_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => return false,
            InputAction::Paginate(delta) => {
                // Keyboard navigation is gated here as well as inside the carousel.
                if self.carousel.is_transitioning() {
                    log::debug!("key navigation ignored while transitioning");
                } else {
                    self.navigate(|carousel| carousel.paginate(delta));
                }
            }
            InputAction::SelectSlide(index) => self.select(index),
            InputAction::Click { column, row } => {
                match self.layout.hit_test(column, row, self.carousel.len()) {
                    Some(HitTarget::PreviousButton) => {
                        self.navigate(|carousel| carousel.paginate(-1))
                    }
                    Some(HitTarget::NextButton) => self.navigate(|carousel| carousel.paginate(1)),
                    Some(HitTarget::Dot(index)) => self.select(index),
                    Some(HitTarget::Slide) | None => {}
                }
            }
            InputAction::Swipe(gesture) => self.swipe(&gesture),
            InputAction::Resize { width, height } => {
                self.viewport = (width, height);
                self.layout = CarouselLayout::compute(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        true
    }

    /// Handle one half of the transition protocol.
    pub fn handle_message(&mut self, message: TransitionMessage) {
        match message {
            TransitionMessage::RequestTransition(transition) => {
                self.animation = Some(SlideAnimation::new(transition, &self.settings.animation));
            }
            TransitionMessage::AnimationComplete(id) => {
                if self.carousel.on_exit_complete(id)
                    && self.animation.as_ref().map(SlideAnimation::id) == Some(id)
                {
                    self.animation = None;
                }
            }
        }
    }

    /// Advance the running animation by `dt`; `now` is used for the optional guard timeout.
    pub fn tick(&mut self, dt: Duration, now: Instant) {
        let completed = self
            .animation
            .as_mut()
            .and_then(|animation| animation.advance(dt));
        if let Some(id) = completed {
            self.handle_message(TransitionMessage::AnimationComplete(id));
        }

        if let Some(timeout) = self.settings.animation.guard_timeout() {
            if self.carousel.release_if_stuck(now, timeout).is_some() {
                self.animation = None;
            }
        }
    }

    /// Snapshot for the renderer.
    pub fn view_state(&self) -> ViewState {
        let current_index = self.carousel.current_index();
        let mut state = ViewState::new(
            self.slide_view(current_index),
            self.carousel.len(),
            self.viewport.0,
            self.viewport.1,
        );
        state.transitioning = self.carousel.is_transitioning();
        state.status_line = self.status_line.clone();

        match &self.animation {
            Some(animation) if !animation.is_exit_complete() => {
                let outgoing = self.slide_view(animation.transition().from_index);
                state.with_animation(outgoing, animation.frame())
            }
            _ => state,
        }
    }

    fn slide_view(&self, index: usize) -> SlideView {
        SlideView {
            index,
            slide: self.carousel.deck().slides()[index].clone(),
            asset: self.assets[index].clone(),
            shift: 0.0,
            opacity: 1.0,
        }
    }

    fn select(&mut self, index: usize) {
        match self.carousel.go_to(index) {
            Ok(outcome) => {
                self.status_line.message = None;
                self.follow_outcome(outcome);
            }
            Err(err) => {
                log::debug!("slide selection rejected: {err}");
                self.status_line
                    .set_message(format!("no certificate {}", index + 1));
            }
        }
    }

    fn swipe(&mut self, gesture: &DragGesture) {
        let hit = self
            .layout
            .hit_test(gesture.start_column, gesture.start_row, self.carousel.len());
        if hit != Some(HitTarget::Slide) {
            return;
        }

        let decision = self.swipe.evaluate(gesture);
        log::debug!("swipe {gesture:?} -> {decision:?}");
        for delta in decision.deltas() {
            self.navigate(|carousel| carousel.paginate(delta));
        }
    }

    fn navigate(&mut self, request: impl FnOnce(&mut Carousel) -> NavOutcome) {
        let outcome = request(&mut self.carousel);
        self.follow_outcome(outcome);
    }

    fn follow_outcome(&mut self, outcome: NavOutcome) {
        if let NavOutcome::Accepted(transition) = outcome {
            self.status_line.message = None;
            self.handle_message(TransitionMessage::RequestTransition(transition));
        }
    }
}
