//! Core data types for the Lights Out grid.
//!
//! Cells live in a flat `Vec` with column-major layout:
//! `cells[x * size + y]` is the cell at `Position { x, y }`.

use serde::{Deserialize, Serialize};

/// A cell coordinate. Off-board coordinates are valid values; the grid
/// resolves them to its dummy sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Position reported by the dummy sentinel.
    pub const OFF_BOARD: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step in `dir`. Never clamps.
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbors in `Direction::ALL` order.
    pub fn neighbors(self) -> [Position; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Neighbor directions. `y` grows downwards, matching screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Propagation order for a toggle.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A single light.
///
/// Neighbor links are stored as positions and resolved through the owning
/// grid on every toggle, so regenerating the grid never leaves a dangling link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    is_on: bool,
    is_dummy: bool,
    just_toggled: bool,
    neighbors: [Position; 4],
}

impl Cell {
    pub fn new(position: Position, is_on: bool) -> Self {
        Self {
            position,
            is_on,
            is_dummy: false,
            just_toggled: false,
            neighbors: [Position::OFF_BOARD; 4],
        }
    }

    /// The off-board sentinel: always off, never toggles.
    pub fn dummy() -> Self {
        Self {
            position: Position::OFF_BOARD,
            is_on: false,
            is_dummy: true,
            just_toggled: false,
            neighbors: [Position::OFF_BOARD; 4],
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.is_dummy
    }

    /// True if this cell flipped during the most recent grid toggle.
    #[inline]
    pub fn just_toggled(&self) -> bool {
        self.just_toggled
    }

    /// Neighbor positions in up, right, down, left order.
    #[inline]
    pub fn neighbors(&self) -> &[Position; 4] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: [Position; 4]) {
        self.neighbors = neighbors;
    }

    pub(crate) fn clear_just_toggled(&mut self) {
        self.just_toggled = false;
    }

    /// Flip this cell only. Returns false (and changes nothing) for the dummy.
    pub fn flip(&mut self) -> bool {
        if self.is_dummy {
            return false;
        }
        self.is_on = !self.is_on;
        self.just_toggled = true;
        true
    }
}
