//! UI state management structures
//!
//! `ViewState` is a snapshot of everything the renderer draws for one frame. It is rebuilt
//! from the carousel and the running animation by the render loop.

use crate::assets::AssetStatus;
use crate::deck::Slide;
use crate::render::animation::AnimationFrame;

/// One slide as it should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub index: usize,
    pub slide: Slide,
    pub asset: AssetStatus,
    /// Horizontal shift as a fraction of the slide area width.
    pub shift: f64,
    pub opacity: f64,
}

/// Frame snapshot for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub heading: String,

    /// Slide being shown (or entering)
    pub current: SlideView,

    /// Slide leaving the screen, while a transition runs
    pub outgoing: Option<SlideView>,

    pub slide_count: usize,

    /// Index of the highlighted dot
    pub active_dot: usize,

    pub transitioning: bool,

    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(current: SlideView, slide_count: usize, width: u16, height: u16) -> Self {
        Self {
            heading: "Certifications".to_string(),
            active_dot: current.index,
            current,
            outgoing: None,
            slide_count,
            transitioning: false,
            status_line: StatusLine::new(),
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Attach an in-flight animation to this snapshot.
    pub fn with_animation(mut self, outgoing: SlideView, frame: AnimationFrame) -> Self {
        self.current.shift = frame.enter_shift;
        self.current.opacity = frame.enter_opacity;
        self.outgoing = Some(SlideView {
            shift: frame.exit_shift,
            opacity: frame.exit_opacity,
            ..outgoing
        });
        self
    }

    /// Accessible position label, e.g. `Certificate 2 of 6`.
    pub fn position_label(&self) -> String {
        format!("Certificate {} of {}", self.current.index + 1, self.slide_count)
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line
            .format_status_line(&self.position_label(), self.transitioning)
    }
}

/// Status line information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusLine {
    /// Transient message (e.g. a rejected selection)
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn format_status_line(&self, position: &str, transitioning: bool) -> String {
        let mut parts = vec![position.to_string()];
        if transitioning {
            parts.push("transitioning".to_string());
        }
        if let Some(message) = &self.message {
            parts.push(message.clone());
        }
        parts.push("←/→ navigate · 1-9 jump · q quit".to_string());
        parts.join(" | ")
    }
}
