//! Application orchestration layer
//!
//! Mounts a carousel, subscribes to terminal input for as long as it is mounted, and runs
//! the frame loop that applies input, advances animations and renders.

pub mod runtime;

use crate::assets::ResourceLoader;
use crate::carousel::Carousel;
use crate::config::Settings;
use crate::deck::SlideDeck;
use crate::error::Result;
use crate::input::InputAction;
use crate::render::ui::UIRenderer;
use crate::render::RenderLoopState;
use runtime::InputSubscription;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, MissedTickBehavior};

/// How long the input thread blocks per poll before re-checking for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator - owns the render loop state and the renderer
pub struct Application {
    state: RenderLoopState,
    ui_renderer: Box<dyn UIRenderer>,
    frame_interval: Duration,
}

impl Application {
    /// Create application by wiring the deck, settings, asset loader and renderer together
    pub fn new(
        deck: SlideDeck,
        settings: Settings,
        loader: &dyn ResourceLoader,
        ui_renderer: Box<dyn UIRenderer>,
    ) -> Result<Self> {
        let viewport = ui_renderer.get_terminal_size()?;
        let frame_interval = settings.animation.frame_interval();
        let state = RenderLoopState::new(Carousel::new(deck), settings, loader, viewport);

        Ok(Self {
            state,
            ui_renderer,
            frame_interval,
        })
    }

    pub fn state(&self) -> &RenderLoopState {
        &self.state
    }

    /// Run against the real terminal until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (mut subscription, rx) = InputSubscription::subscribe(INPUT_POLL_INTERVAL);
        let outcome = self.event_loop(rx).await;
        subscription.unsubscribe();

        let cleanup = self.ui_renderer.cleanup();
        outcome.and(cleanup)
    }

    /// Frame loop fed by an arbitrary action source. Returns when a `Quit` action arrives
    /// or the source closes.
    pub async fn event_loop(&mut self, mut rx: UnboundedReceiver<InputAction>) -> Result<()> {
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        self.ui_renderer.render(&self.state.view_state())?;

        loop {
            tokio::select! {
                action = rx.recv() => match action {
                    Some(action) => {
                        if !self.state.process_action(action) {
                            break;
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => {
                    let now = Instant::now();
                    self.state.tick(now - last_frame, now.into_std());
                    last_frame = now;
                }
            }

            self.ui_renderer.render(&self.state.view_state())?;
        }

        Ok(())
    }
}
