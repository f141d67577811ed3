//! Grid addressing for rectangular mazes
//!
//! Cells are numbered row-major from the top-left corner. Every internal wall
//! is owned by the lower-numbered of the two cells it separates, as that
//! cell's right wall or bottom wall, so walls number `2 * cell` (right) and
//! `2 * cell + 1` (bottom). Ids owned by last-column cells (right) or
//! last-row cells (bottom) name border walls and never separate two cells.

use std::fmt;
use std::str::FromStr;

use crate::io::error::MazeError;

/// Width and height of a rectangular cell lattice
///
/// Only obtainable from a validated [`Configuration`](crate::io::configuration::Configuration),
/// so both sides are always at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl GridDimensions {
    pub(crate) const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of columns
    pub const fn width(self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of cells
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Size of the wall id space, border ids included
    pub const fn wall_capacity(self) -> usize {
        2 * self.area()
    }

    /// Test whether a position lies inside the grid
    pub const fn contains(self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Row-major index of a position
    pub const fn cell_index(self, position: Position) -> usize {
        position.y * self.width + position.x
    }

    /// Position of a row-major cell index
    pub const fn position_of(self, cell: usize) -> Position {
        Position {
            x: cell % self.width,
            y: cell / self.width,
        }
    }

    /// Move one cell in `direction`, or `None` when that leaves the grid
    pub fn step(self, position: Position, direction: Direction) -> Option<Position> {
        position
            .offset(direction)
            .filter(|&next| self.contains(next))
    }

    /// Neighbouring cells in the order left, right, up, down
    pub fn neighbours(self, cell: usize) -> impl Iterator<Item = usize> {
        let width = self.width;
        let area = self.area();
        [
            (cell % width != 0).then(|| cell - 1),
            ((cell + 1) % width != 0).then_some(cell + 1),
            (cell >= width).then(|| cell - width),
            (cell + width < area).then_some(cell + width),
        ]
        .into_iter()
        .flatten()
    }

    /// Walls between `cell` and each of its neighbours, in neighbour order
    pub fn boundary_walls(self, cell: usize) -> impl Iterator<Item = WallId> {
        self.neighbours(cell)
            .filter_map(move |neighbour| self.wall_between(cell, neighbour))
    }

    /// Canonical wall separating two adjacent cells
    ///
    /// Returns `None` when the cells are not grid neighbours.
    pub const fn wall_between(self, cell_a: usize, cell_b: usize) -> Option<WallId> {
        let (low, high) = if cell_a <= cell_b {
            (cell_a, cell_b)
        } else {
            (cell_b, cell_a)
        };
        if high >= self.area() {
            None
        } else if high == low + 1 && high % self.width != 0 {
            Some(WallId::right_of(low))
        } else if high == low + self.width {
            Some(WallId::bottom_of(low))
        } else {
            None
        }
    }

    /// The two cells a wall separates, lower-numbered first
    ///
    /// Returns `None` for border walls and ids beyond the grid.
    pub const fn wall_cells(self, wall: WallId) -> Option<(usize, usize)> {
        let owner = wall.owner();
        if owner >= self.area() {
            return None;
        }
        match wall.relation() {
            WallRelation::Right if (owner + 1) % self.width != 0 => Some((owner, owner + 1)),
            WallRelation::Bottom if owner + self.width < self.area() => {
                Some((owner, owner + self.width))
            }
            _ => None,
        }
    }

    /// Test whether a wall id separates two cells of this grid
    pub const fn is_internal_wall(self, wall: WallId) -> bool {
        self.wall_cells(wall).is_some()
    }

    /// Number of walls separating two cells
    pub const fn internal_wall_count(self) -> usize {
        (self.width - 1) * self.height + self.width * (self.height - 1)
    }
}

/// Column and row of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing rightwards
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl Position {
    /// Create a position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a unit move without any upper bound check
    ///
    /// Returns `None` only when the move would go below zero.
    pub const fn offset(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => match self.y.checked_sub(1) {
                Some(y) => Some(Self { x: self.x, y }),
                None => None,
            },
            Direction::Down => Some(Self {
                x: self.x,
                y: self.y + 1,
            }),
            Direction::Left => match self.x.checked_sub(1) {
                Some(x) => Some(Self { x, y: self.y }),
                None => None,
            },
            Direction::Right => Some(Self {
                x: self.x + 1,
                y: self.y,
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which of its owner's two walls a wall id names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallRelation {
    /// Boundary with the cell to the right
    Right,
    /// Boundary with the cell below
    Bottom,
}

/// Global wall number: even ids are right walls, odd ids bottom walls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(usize);

impl WallId {
    /// Wrap a raw wall number
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Right wall of `cell`
    pub const fn right_of(cell: usize) -> Self {
        Self(2 * cell)
    }

    /// Bottom wall of `cell`
    pub const fn bottom_of(cell: usize) -> Self {
        Self(2 * cell + 1)
    }

    /// Raw wall number
    pub const fn index(self) -> usize {
        self.0
    }

    /// Cell owning this wall
    pub const fn owner(self) -> usize {
        self.0 / 2
    }

    /// Whether this is its owner's right or bottom wall
    pub const fn relation(self) -> WallRelation {
        if self.0 % 2 == 0 {
            WallRelation::Right
        } else {
            WallRelation::Bottom
        }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the four arrow directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero
    Up,
    /// Away from row zero
    Down,
    /// Towards column zero
    Left,
    /// Away from column zero
    Right,
}

impl Direction {
    /// Every direction, in arrow-classifier order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Single-letter notation used for command scripts
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Decode a single letter, arrow glyph, or direction word
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "u" | "up" | "↑" => Some(Self::Up),
            "d" | "down" | "↓" => Some(Self::Down),
            "l" | "left" | "←" => Some(Self::Left),
            "r" | "right" | "→" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::from_token(token.trim()).ok_or_else(|| MazeError::InvalidDirection {
            token: token.to_string(),
        })
    }
}
