//! Edge detection: which viewport boundaries a pointer position has crossed.

use crate::direction::{Direction, DirectionFlags};
use crate::geometry::Point;
use crate::viewport::ViewportSnapshot;

/// Whether `position` lies past the `direction` edge of the viewport.
///
/// Left and up only count while there is room to scroll back
/// (`offset > 0`). Right and down are measured against the visible size
/// alone; reaching the far extent is detected by the controller on tick.
pub fn crosses(direction: Direction, position: Point, viewport: &ViewportSnapshot) -> bool {
    match direction {
        Direction::Left => position.x < 0.0 && viewport.offset.horizontal > 0.0,
        Direction::Right => position.x > viewport.visible.width,
        Direction::Up => position.y < 0.0 && viewport.offset.vertical > 0.0,
        Direction::Down => position.y > viewport.visible.height,
    }
}

/// All boundaries crossed by `position`.
pub fn crossed_boundaries(position: Point, viewport: &ViewportSnapshot) -> DirectionFlags {
    Direction::ALL
        .into_iter()
        .filter(|&direction| crosses(direction, position, viewport))
        .collect()
}
