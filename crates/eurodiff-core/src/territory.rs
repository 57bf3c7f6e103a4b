//! Grid coordinates and country footprints.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A position on the grid. Valid city positions run from 1 to the grid size
/// on both axes; row and column 0 and `grid_size + 1` are padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both coordinates lie in `1..=grid_size`.
    pub fn is_inside(self, grid_size: u32) -> bool {
        let max = grid_size as i32;
        (1..=max).contains(&self.x) && (1..=max).contains(&self.y)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Cardinal directions. `y` grows northwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four cardinal directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    /// Offset for this direction.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Territory
// ---------------------------------------------------------------------------

/// A country's footprint: a name and an inclusive rectangle.
///
/// Territories arrive already validated by the input layer. The lattice only
/// checks what it needs to index the grid safely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    #[serde(rename = "ll")]
    pub lower_left: GridPosition,
    #[serde(rename = "ur")]
    pub upper_right: GridPosition,
}

impl Territory {
    pub fn new(name: impl Into<String>, lower_left: GridPosition, upper_right: GridPosition) -> Self {
        Self {
            name: name.into(),
            lower_left,
            upper_right,
        }
    }

    /// Iterate over every position inside the rectangle, column by column.
    /// Yields nothing if the corners are inverted.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> {
        let (xl, yl) = (self.lower_left.x, self.lower_left.y);
        let (xh, yh) = (self.upper_right.x, self.upper_right.y);
        (xl..=xh).flat_map(move |x| (yl..=yh).map(move |y| GridPosition::new(x, y)))
    }

    /// Number of cities in the rectangle.
    pub fn cell_count(&self) -> usize {
        let w = (self.upper_right.x - self.lower_left.x + 1).max(0) as usize;
        let h = (self.upper_right.y - self.lower_left.y + 1).max(0) as usize;
        w * h
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        (self.lower_left.x..=self.upper_right.x).contains(&pos.x)
            && (self.lower_left.y..=self.upper_right.y).contains(&pos.y)
    }
}
