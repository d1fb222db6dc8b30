//! Low-level input collection: crossterm polling, pointer press/drag/release tracking, and
//! translation into primitive events that the higher-level input service can consume.

use crate::error::Result;
use crate::input::swipe::{DragGesture, DragTracker, PointerRelease};
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Click { column: u16, row: u16 },
    Drag(DragGesture),
}

/// Collector that polls crossterm for events and folds pointer sequences into gestures.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    drag: DragTracker,
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the collector has no pending events and no drag in progress.
    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty() && !self.drag.is_active()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event, Instant::now());
    }

    /// Process a synthetic event observed at `now`.
    pub fn process_event_at(&mut self, event: Event, now: Instant) {
        self.enqueue_event(event, now);
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        self.enqueue_event(event, Instant::now());
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => {
                if let Some(raw) = self.handle_mouse_event(mouse_event, now) {
                    self.pending_events.push_back(raw);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, now: Instant) -> Option<RawInputEvent> {
        let MouseEvent {
            kind, column, row, ..
        } = mouse_event;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag.press(column, row, now);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag.drag(column, now);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.drag.release(column, row, now)? {
                    PointerRelease::Click { column, row } => {
                        Some(RawInputEvent::Click { column, row })
                    }
                    PointerRelease::Drag(gesture) => Some(RawInputEvent::Drag(gesture)),
                }
            }
            _ => None,
        }
    }

    /// Pop the next pending raw event.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}
