//! Scroll directions and the per-direction activity flags.

use std::ops::Index;

/// One of the four edges a pointer can be dragged past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The axis a direction scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Independent on/off flags for the four directions.
///
/// Opposite directions are not folded into a tri-state: nothing here stops
/// left and right from both being set, the controller resolves that at tick
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionFlags([bool; 4]);

impl DirectionFlags {
    pub const NONE: DirectionFlags = DirectionFlags([false; 4]);

    pub fn contains(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    /// Set `direction`; returns true if it was not set before.
    pub fn insert(&mut self, direction: Direction) -> bool {
        !std::mem::replace(&mut self.0[direction.index()], true)
    }

    /// Clear `direction`; returns true if it was set before.
    pub fn remove(&mut self, direction: Direction) -> bool {
        std::mem::replace(&mut self.0[direction.index()], false)
    }

    pub fn clear(&mut self) {
        self.0 = [false; 4];
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&set| set)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }

    /// Set directions in `Direction::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl Index<Direction> for DirectionFlags {
    type Output = bool;

    fn index(&self, direction: Direction) -> &bool {
        &self.0[direction.index()]
    }
}

impl FromIterator<Direction> for DirectionFlags {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut flags = DirectionFlags::NONE;
        for direction in iter {
            flags.insert(direction);
        }
        flags
    }
}
