use autoscroll::{Point, Size};

/// The on-screen cells occupied by a viewport.
///
/// Coordinates are signed so a viewport partly scrolled off screen can still
/// be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region, clamping width and height to be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn from_u16(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(x as i32, y as i32, width as i32, height as i32)
    }

    /// Returns true if the cell at (x, y) is inside this region.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Centre of a terminal cell, relative to the region's top-left corner.
    ///
    /// Using the centre keeps the edges strict: the column just right of the
    /// region maps to `width + 0.5`, which is past the visible width, and the
    /// column just left of it maps to `-0.5`.
    pub fn relative_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            f64::from(column) - f64::from(self.x) + 0.5,
            f64::from(row) - f64::from(self.y) + 0.5,
        )
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}
