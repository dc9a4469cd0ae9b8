//! Shared layout and scrolling helpers for dialogs.

use ratatui::layout::{Position, Rect};

/// Helper to create a centered rectangle.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Whether a terminal cell lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Scroll offsets for one viewport, clamped to the extent of the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    vertical: u16,
    horizontal: u16,
    max_vertical: u16,
    max_horizontal: u16,
    /// Rows visible at once, used for paging.
    page: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical offset in rows.
    pub fn vertical(&self) -> u16 {
        self.vertical
    }

    /// Current horizontal offset in columns.
    pub fn horizontal(&self) -> u16 {
        self.horizontal
    }

    /// Record the scrollable extent measured while drawing.
    pub fn set_extent(&mut self, max_vertical: u16, max_horizontal: u16, page: u16) {
        self.max_vertical = max_vertical;
        self.max_horizontal = max_horizontal;
        self.page = page;
        self.vertical = self.vertical.min(max_vertical);
        self.horizontal = self.horizontal.min(max_horizontal);
    }

    pub fn max_vertical(&self) -> u16 {
        self.max_vertical
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.vertical = self.vertical.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.vertical = self.vertical.saturating_add(rows).min(self.max_vertical);
    }

    pub fn scroll_left(&mut self, columns: u16) {
        self.horizontal = self.horizontal.saturating_sub(columns);
    }

    pub fn scroll_right(&mut self, columns: u16) {
        self.horizontal = self
            .horizontal
            .saturating_add(columns)
            .min(self.max_horizontal);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page.saturating_sub(1).max(1));
    }

    /// Jump back to the top-left corner.
    pub fn home(&mut self) {
        self.vertical = 0;
        self.horizontal = 0;
    }

    pub fn end(&mut self) {
        self.vertical = self.max_vertical;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 20, area), Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(centered_rect(50, 20, area), Rect::new(2, 3, 10, 5));
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(10, 5, 4, 2);
        assert!(contains(area, 10, 5));
        assert!(contains(area, 13, 6));
        assert!(!contains(area, 14, 6));
        assert!(!contains(area, 9, 5));
    }

    #[test]
    fn test_scroll_without_extent_stays_put() {
        let mut scroll = ScrollState::new();
        scroll.scroll_down(3);
        scroll.scroll_right(3);
        assert_eq!((scroll.vertical(), scroll.horizontal()), (0, 0));
    }

    #[test]
    fn test_scroll_clamps_to_extent() {
        let mut scroll = ScrollState::new();
        scroll.set_extent(5, 8, 4);
        scroll.scroll_down(10);
        scroll.scroll_right(10);
        assert_eq!((scroll.vertical(), scroll.horizontal()), (5, 8));
        scroll.scroll_up(2);
        scroll.scroll_left(20);
        assert_eq!((scroll.vertical(), scroll.horizontal()), (3, 0));
    }

    #[test]
    fn test_shrinking_extent_clamps_offsets() {
        let mut scroll = ScrollState::new();
        scroll.set_extent(10, 10, 4);
        scroll.end();
        scroll.scroll_right(10);
        scroll.set_extent(2, 1, 4);
        assert_eq!((scroll.vertical(), scroll.horizontal()), (2, 1));
    }

    #[test]
    fn test_paging_and_home() {
        let mut scroll = ScrollState::new();
        scroll.set_extent(20, 5, 6);
        scroll.page_down();
        assert_eq!(scroll.vertical(), 5);
        scroll.page_up();
        assert_eq!(scroll.vertical(), 0);
        scroll.end();
        scroll.scroll_right(3);
        scroll.home();
        assert_eq!((scroll.vertical(), scroll.horizontal()), (0, 0));
    }
}
