//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for rendering terminal interfaces and managing
//! lifecycle hooks such as initialization and cleanup.

use crate::error::Result;
use crate::render::ui::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Render the current view state to the terminal
    ///
    /// This method should:
    /// - Draw the heading, slide card(s), buttons and dots
    /// - Offset and dim slides according to the animation frame
    /// - Update the status line
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enable mouse capture
    /// - Enter the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    ///
    /// This method should:
    /// - Disable mouse capture
    /// - Exit raw mode
    /// - Leave the alternate screen
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock UI renderer for testing
    ///
    /// Records every rendered frame so tests can inspect what would have been drawn.
    pub struct MockUIRenderer {
        pub frames: Vec<ViewState>,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub cleanup_count: usize,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        /// Create a new mock renderer with default settings
        pub fn new() -> Self {
            Self {
                frames: Vec::new(),
                terminal_size: (80, 24),
                is_initialized: false,
                cleanup_count: 0,
            }
        }

        /// Set terminal size for testing
        pub fn set_terminal_size(&mut self, width: u16, height: u16) {
            self.terminal_size = (width, height);
        }

        pub fn render_count(&self) -> usize {
            self.frames.len()
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, view_state: &ViewState) -> Result<()> {
            self.frames.push(view_state.clone());
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            self.cleanup_count += 1;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        use crate::assets::AssetStatus;
        use crate::deck::Slide;
        use crate::render::ui::state::SlideView;

        let mut renderer = MockUIRenderer::new();
        let view_state = ViewState::new(
            SlideView {
                index: 0,
                slide: Slide::new(1, "Cert", "cert.jpg"),
                asset: AssetStatus::Unresolved,
                shift: 0.0,
                opacity: 1.0,
            },
            1,
            80,
            24,
        );

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count(), 0);
        renderer.render(&view_state).unwrap();
        assert_eq!(renderer.render_count(), 1);
        assert_eq!(renderer.frames[0], view_state);

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_resize_handling() {
        let mut renderer = MockUIRenderer::new();
        renderer.set_terminal_size(120, 30);
        assert_eq!(renderer.get_terminal_size().unwrap(), (120, 30));
    }
}
