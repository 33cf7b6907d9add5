//! Scroll area geometry.
//!
//! The gallery content is a column of terminal rows: the body (grid, error
//! or not-found message) followed by the loading indicator. The viewport
//! tracks which rows are on screen and answers whether the loader is fully
//! visible, which is the sentinel signal that drives pagination.

use crate::gallery::GalleryBody;

/// Rows occupied by one product card.
pub const CARD_HEIGHT: usize = 5;
/// Narrowest a card column may get before the grid drops a column.
pub const MIN_CARD_WIDTH: u16 = 24;
pub const MAX_COLUMNS: usize = 4;
/// Rows occupied by the loading indicator.
pub const LOADER_HEIGHT: usize = 3;
/// Rows occupied by an error or not-found message.
pub const MESSAGE_HEIGHT: usize = 3;

pub fn columns_for_width(width: u16) -> usize {
    usize::from(width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Row layout of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    pub columns: usize,
    pub body_height: usize,
    /// First row of the loader, if it is rendered.
    pub loader_top: Option<usize>,
    pub content_height: usize,
}

impl ContentLayout {
    pub fn measure(body: &GalleryBody<'_>, width: u16, loader_rendered: bool) -> Self {
        let columns = columns_for_width(width);
        let body_height = match body {
            GalleryBody::Error { .. } | GalleryBody::NotFound { .. } => MESSAGE_HEIGHT,
            GalleryBody::Blank => 0,
            GalleryBody::Grid { slots } => slots.len().div_ceil(columns) * CARD_HEIGHT,
        };
        let loader_top = loader_rendered.then_some(body_height);
        let content_height = body_height + if loader_rendered { LOADER_HEIGHT } else { 0 };
        Self {
            columns,
            body_height,
            loader_top,
            content_height,
        }
    }
}

/// Scroll state for a fixed-height window over taller content.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: usize,
    viewport_height: usize,
    content_height: usize,
}

impl Viewport {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            offset: 0,
            viewport_height,
            content_height: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn set_content_height(&mut self, height: usize) {
        self.content_height = height;
        self.clamp();
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp();
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = (self.offset + rows).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Whether rows `top..top + height` lie entirely inside the viewport.
    pub fn is_fully_visible(&self, top: usize, height: usize) -> bool {
        if self.viewport_height == 0 || height > self.viewport_height {
            return false;
        }
        top >= self.offset && top + height <= self.offset + self.viewport_height
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::CardSlot;

    fn grid(slot_count: usize) -> GalleryBody<'static> {
        GalleryBody::Grid {
            slots: (0..slot_count).map(CardSlot::Placeholder).collect(),
        }
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(30), 1);
        assert_eq!(columns_for_width(72), 3);
        assert_eq!(columns_for_width(400), MAX_COLUMNS);
    }

    #[test]
    fn test_measure_grid_with_loader() {
        let layout = ContentLayout::measure(&grid(10), 72, true);
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.body_height, 4 * CARD_HEIGHT);
        assert_eq!(layout.loader_top, Some(20));
        assert_eq!(layout.content_height, 23);
    }

    #[test]
    fn test_measure_message_without_loader() {
        let body = GalleryBody::NotFound { message: "none" };
        let layout = ContentLayout::measure(&body, 80, false);
        assert_eq!(layout.body_height, MESSAGE_HEIGHT);
        assert_eq!(layout.loader_top, None);
        assert_eq!(layout.content_height, MESSAGE_HEIGHT);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut viewport = Viewport::new(10);
        viewport.set_content_height(25);

        viewport.scroll_down(100);
        assert_eq!(viewport.offset(), 15);

        viewport.scroll_up(4);
        assert_eq!(viewport.offset(), 11);

        viewport.page_up();
        assert_eq!(viewport.offset(), 1);

        viewport.scroll_to_top();
        assert_eq!(viewport.offset(), 0);

        viewport.scroll_to_bottom();
        assert_eq!(viewport.offset(), 15);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut viewport = Viewport::new(10);
        viewport.set_content_height(50);
        viewport.scroll_to_bottom();

        viewport.set_content_height(12);
        assert_eq!(viewport.offset(), 2);

        viewport.set_content_height(5);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_full_visibility_threshold() {
        let mut viewport = Viewport::new(10);
        viewport.set_content_height(30);

        assert!(viewport.is_fully_visible(7, 3));
        assert!(!viewport.is_fully_visible(8, 3));

        viewport.scroll_down(1);
        assert!(viewport.is_fully_visible(8, 3));
        assert!(!viewport.is_fully_visible(0, 3));
    }

    #[test]
    fn test_zero_height_viewport_sees_nothing() {
        let viewport = Viewport::new(0);
        assert!(!viewport.is_fully_visible(0, 1));
    }
}
