//! The host viewport interface.
//!
//! The auto-scroller never caches viewport geometry: every boundary check and
//! every tick starts from a fresh read, so another actor moving the offsets in
//! between is simply picked up on the next read.

use crate::geometry::{ScrollOffset, Size};

/// A scrollable area owned by the host.
pub trait Viewport {
    /// Current scroll offsets.
    fn offsets(&self) -> ScrollOffset;

    /// Scrollable extent per axis, i.e. the largest valid offset.
    fn extents(&self) -> Size;

    /// Size of the visible area.
    fn visible_size(&self) -> Size;

    /// Zoom (or equivalent transform) currently applied.
    ///
    /// Passed back unchanged with every offset request.
    fn zoom_factor(&self) -> f32 {
        1.0
    }

    /// Ask the host to move to `offset`.
    ///
    /// Hosts are expected to clamp out-of-range values themselves.
    fn request_offsets(&mut self, offset: ScrollOffset, zoom_factor: f32);

    /// Read offsets, extents and visible size in one go.
    fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            offset: self.offsets(),
            extent: self.extents(),
            visible: self.visible_size(),
        }
    }
}

/// Geometry of a viewport at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSnapshot {
    pub offset: ScrollOffset,
    pub extent: Size,
    pub visible: Size,
}

impl ViewportSnapshot {
    pub fn new(offset: ScrollOffset, extent: Size, visible: Size) -> Self {
        Self {
            offset,
            extent,
            visible,
        }
    }
}
