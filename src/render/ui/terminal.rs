//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for a
//! cross-platform terminal interface. It draws whatever `ViewState` describes and keeps no
//! carousel state of its own.

use crate::assets::AssetStatus;
use crate::error::Result;
use crate::render::ui::layout::CarouselLayout;
use crate::render::ui::renderer::UIRenderer;
use crate::render::ui::state::{SlideView, ViewState};
use crate::render::ui::theme::ColorTheme;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Draw a full frame into `frame`.
    pub fn draw_view(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
        let size = frame.size();
        let layout = CarouselLayout::compute(size.width, size.height);

        let heading = Paragraph::new(Line::from(Span::styled(
            view_state.heading.as_str(),
            theme.heading,
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.card_border));
        frame.render_widget(heading, layout.header);

        if let Some(outgoing) = &view_state.outgoing {
            Self::render_slide(frame, layout.slide, outgoing, theme);
        }
        Self::render_slide(frame, layout.slide, &view_state.current, theme);

        Self::render_button(frame, layout.prev_button, "←", theme);
        Self::render_button(frame, layout.next_button, "→", theme);
        Self::render_dots(frame, &layout, view_state, theme);

        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(view_state.format_status_line()).style(status_style);
        frame.render_widget(status, layout.status);
    }

    /// Visible part of `area` after shifting it horizontally, plus the number of columns
    /// hidden on the left.
    fn shifted_area(area: Rect, shift: f64) -> Option<(Rect, u16)> {
        let offset = (shift * f64::from(area.width)).round() as i64;
        let magnitude = offset.unsigned_abs().min(u64::from(area.width)) as u16;
        if magnitude >= area.width {
            return None;
        }
        let visible = area.width - magnitude;
        if offset >= 0 {
            Some((Rect::new(area.x + magnitude, area.y, visible, area.height), 0))
        } else {
            Some((Rect::new(area.x, area.y, visible, area.height), magnitude))
        }
    }

    fn render_slide(frame: &mut Frame, area: Rect, view: &SlideView, theme: &ColorTheme) {
        let Some((target, hidden_left)) = Self::shifted_area(area, view.shift) else {
            return;
        };

        let dim = |style: Style| {
            if view.opacity < 0.5 {
                style.add_modifier(Modifier::DIM)
            } else {
                style
            }
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(view.slide.title.as_str(), dim(theme.slide_title))),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", view.slide.image_ref),
                dim(theme.detail_text),
            )),
        ];
        match &view.asset {
            AssetStatus::Unresolved => {}
            AssetStatus::Available { .. } => lines.push(Line::from(Span::styled(
                view.asset.describe(),
                dim(theme.detail_text),
            ))),
            AssetStatus::Missing { .. } => lines.push(Line::from(Span::styled(
                view.asset.describe(),
                dim(theme.error_text),
            ))),
        }

        let mut paragraph = Paragraph::new(lines).scroll((0, hidden_left));
        if view.shift == 0.0 {
            paragraph = paragraph.alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.card_border),
            );
        }
        frame.render_widget(paragraph, target);
    }

    fn render_button(frame: &mut Frame, area: Rect, label: &str, theme: &ColorTheme) {
        let button = Paragraph::new(Span::styled(label, theme.button))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(theme.button));
        frame.render_widget(button, area);
    }

    fn render_dots(
        frame: &mut Frame,
        layout: &CarouselLayout,
        view_state: &ViewState,
        theme: &ColorTheme,
    ) {
        let count = view_state.slide_count;
        if count == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(count * 2);
        for index in 0..count {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let (symbol, style) = if index == view_state.active_dot {
                ("●", theme.dot_active)
            } else {
                ("○", theme.dot_inactive)
            };
            spans.push(Span::styled(symbol, style));
        }

        let start = layout.dot_column(0, count);
        let width = layout.dots.right().saturating_sub(start);
        let area = Rect::new(start, layout.dots.y, width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;
            terminal.draw(move |frame| Self::draw_view(frame, view_state, theme))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
