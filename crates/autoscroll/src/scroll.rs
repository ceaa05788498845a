//! In-memory scroll state usable as a [`Viewport`].

use crate::geometry::{ScrollOffset, Size};
use crate::viewport::Viewport;

/// Scroll state for a scrollable container.
///
/// Hosts that track scroll geometry themselves (rather than delegating to a
/// native scroll view) can hand this to the auto-scroller directly and read
/// the offsets back when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset from the left
    pub offset_x: f64,
    /// Current scroll offset from the top
    pub offset_y: f64,
    /// Virtual content width
    pub virtual_width: f64,
    /// Virtual content height
    pub virtual_height: f64,
    /// Viewport width
    pub viewport_width: f64,
    /// Viewport height
    pub viewport_height: f64,
    /// Zoom factor, carried through offset requests untouched
    pub zoom: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl ScrollState {
    /// Create new scroll state with given dimensions.
    pub fn new(
        virtual_width: f64,
        virtual_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            virtual_width,
            virtual_height,
            viewport_width,
            viewport_height,
            zoom: 1.0,
        }
    }

    /// Start at the given offsets (clamped to bounds).
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.scroll_to(Some(x), Some(y));
        self
    }

    /// Maximum horizontal scroll offset.
    pub fn max_scroll_x(&self) -> f64 {
        (self.virtual_width - self.viewport_width).max(0.0)
    }

    /// Maximum vertical scroll offset.
    pub fn max_scroll_y(&self) -> f64 {
        (self.virtual_height - self.viewport_height).max(0.0)
    }

    /// Whether horizontal scrolling is possible.
    pub fn can_scroll_x(&self) -> bool {
        self.virtual_width > self.viewport_width
    }

    /// Whether vertical scrolling is possible.
    pub fn can_scroll_y(&self) -> bool {
        self.virtual_height > self.viewport_height
    }

    /// Current horizontal scroll position as 0.0-1.0 percentage.
    pub fn scroll_percent_x(&self) -> f64 {
        let max = self.max_scroll_x();
        if max == 0.0 { 0.0 } else { self.offset_x / max }
    }

    /// Current vertical scroll position as 0.0-1.0 percentage.
    pub fn scroll_percent_y(&self) -> f64 {
        let max = self.max_scroll_y();
        if max == 0.0 { 0.0 } else { self.offset_y / max }
    }

    /// Scroll to absolute position (clamped to bounds).
    pub fn scroll_to(&mut self, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            self.offset_x = x.clamp(0.0, self.max_scroll_x());
        }
        if let Some(y) = y {
            self.offset_y = y.clamp(0.0, self.max_scroll_y());
        }
    }

    /// Update viewport dimensions.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_offsets();
    }

    /// Update virtual content dimensions.
    pub fn set_virtual_size(&mut self, width: f64, height: f64) {
        self.virtual_width = width;
        self.virtual_height = height;
        self.clamp_offsets();
    }

    fn clamp_offsets(&mut self) {
        self.offset_x = self.offset_x.min(self.max_scroll_x()).max(0.0);
        self.offset_y = self.offset_y.min(self.max_scroll_y()).max(0.0);
    }
}

impl Viewport for ScrollState {
    fn offsets(&self) -> ScrollOffset {
        ScrollOffset::new(self.offset_x, self.offset_y)
    }

    fn extents(&self) -> Size {
        Size::new(self.max_scroll_x(), self.max_scroll_y())
    }

    fn visible_size(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    fn zoom_factor(&self) -> f32 {
        self.zoom
    }

    fn request_offsets(&mut self, offset: ScrollOffset, zoom_factor: f32) {
        self.zoom = zoom_factor;
        self.scroll_to(Some(offset.horizontal), Some(offset.vertical));
    }
}
