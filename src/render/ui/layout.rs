//! Screen geometry shared by the renderer and pointer hit-testing.

use crate::render::protocol::HitTarget;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const BUTTON_WIDTH: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
/// Columns from one dot to the next.
const DOT_PITCH: u16 = 3;

/// Regions of the carousel screen for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub header: Rect,
    pub slide: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub dots: Rect,
    pub status: Rect,
}

impl CarouselLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH + 1),
                Constraint::Min(1),
                Constraint::Length(BUTTON_WIDTH + 1),
            ])
            .split(rows[1]);

        let body = rows[1];
        let button_height = BUTTON_HEIGHT.min(body.height);
        let button_y = body.y + (body.height - button_height) / 2;
        let prev_button = Rect::new(
            columns[0].x,
            button_y,
            BUTTON_WIDTH.min(columns[0].width),
            button_height,
        );
        let next_x = columns[2].x + columns[2].width.saturating_sub(BUTTON_WIDTH);
        let next_button = Rect::new(
            next_x,
            button_y,
            BUTTON_WIDTH.min(columns[2].width),
            button_height,
        );

        Self {
            header: rows[0],
            slide: columns[1],
            prev_button,
            next_button,
            dots: rows[2],
            status: rows[4],
        }
    }

    /// Column of the first dot when `count` dots are centered in the dot row.
    fn dots_start(&self, count: usize) -> u16 {
        let span = (count as u16).saturating_mul(DOT_PITCH).saturating_sub(DOT_PITCH - 1);
        self.dots.x + self.dots.width.saturating_sub(span) / 2
    }

    /// Column at which dot `index` of `count` is drawn.
    pub fn dot_column(&self, index: usize, count: usize) -> u16 {
        self.dots_start(count) + index as u16 * DOT_PITCH
    }

    /// Which interactive region, if any, contains the cell.
    pub fn hit_test(&self, column: u16, row: u16, dot_count: usize) -> Option<HitTarget> {
        if contains(self.prev_button, column, row) {
            return Some(HitTarget::PreviousButton);
        }
        if contains(self.next_button, column, row) {
            return Some(HitTarget::NextButton);
        }
        if contains(self.slide, column, row) {
            return Some(HitTarget::Slide);
        }
        if row == self.dots.y && dot_count > 0 {
            let start = self.dots_start(dot_count);
            // Each dot owns the cell it is drawn on plus one on either side.
            let slot = (i32::from(column) - i32::from(start) + 1).div_euclid(i32::from(DOT_PITCH));
            if slot >= 0 && (slot as usize) < dot_count {
                return Some(HitTarget::Dot(slot as usize));
            }
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let layout = CarouselLayout::compute(80, 24);
        assert_eq!(layout.header, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.slide.y, 3);
        assert_eq!(layout.slide.height, 18);
        assert_eq!(layout.dots.y, 21);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn buttons_flank_the_slide() {
        let layout = CarouselLayout::compute(80, 24);
        assert_eq!(layout.prev_button.x, 0);
        assert!(layout.prev_button.right() <= layout.slide.x);
        assert!(layout.next_button.x >= layout.slide.right());
        assert_eq!(layout.next_button.right(), 80);
    }

    #[test]
    fn hit_test_finds_buttons_and_slide() {
        let layout = CarouselLayout::compute(80, 24);
        let prev = layout.prev_button;
        let next = layout.next_button;
        assert_eq!(
            layout.hit_test(prev.x + 1, prev.y + 1, 6),
            Some(HitTarget::PreviousButton)
        );
        assert_eq!(
            layout.hit_test(next.x + 1, next.y + 1, 6),
            Some(HitTarget::NextButton)
        );
        assert_eq!(layout.hit_test(40, 10, 6), Some(HitTarget::Slide));
        assert_eq!(layout.hit_test(40, 0, 6), None);
    }

    #[test]
    fn hit_test_maps_dots() {
        let layout = CarouselLayout::compute(80, 24);
        let row = layout.dots.y;
        for index in 0..6 {
            let column = layout.dot_column(index, 6);
            assert_eq!(layout.hit_test(column, row, 6), Some(HitTarget::Dot(index)));
            assert_eq!(
                layout.hit_test(column + 1, row, 6),
                Some(HitTarget::Dot(index))
            );
        }
        let first = layout.dot_column(0, 6);
        assert_eq!(layout.hit_test(first - 2, row, 6), None);
        let last = layout.dot_column(5, 6);
        assert_eq!(layout.hit_test(last + 2, row, 6), None);
    }

    #[test]
    fn dots_are_centered() {
        let layout = CarouselLayout::compute(80, 24);
        let first = layout.dot_column(0, 6);
        let last = layout.dot_column(5, 6);
        assert_eq!(last - first, 15);
        assert_eq!(first, (80 - 16) / 2);
    }
}
