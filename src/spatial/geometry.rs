//! Line-segment geometry handed to the external renderer
//!
//! Maze walls are expressed in corner units: cell `(x, y)` spans the square
//! with corners `(x, y)` and `(x + 1, y + 1)`. Trace steps are expressed in
//! cell units, where `(x, y)` denotes the centre of cell `(x, y)`.

use std::fmt;

use crate::algorithm::bitset::IndexBitset;
use crate::spatial::grid::{GridDimensions, Position, WallId};

/// Axis-aligned segment between two integer grid points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    /// First endpoint `[x, y]`
    pub start: [usize; 2],
    /// Second endpoint `[x, y]`
    pub end: [usize; 2],
}

impl LineSegment {
    /// Create a segment from two endpoints
    pub const fn new(start: [usize; 2], end: [usize; 2]) -> Self {
        Self { start, end }
    }

    /// Horizontal segment at height `y` from `x1` to `x2`
    pub const fn horizontal(y: usize, x1: usize, x2: usize) -> Self {
        Self::new([x1, y], [x2, y])
    }

    /// Vertical segment at column `x` from `y1` to `y2`
    pub const fn vertical(x: usize, y1: usize, y2: usize) -> Self {
        Self::new([x, y1], [x, y2])
    }

    /// Segment joining the centres of two cells
    pub const fn between_cells(from: Position, to: Position) -> Self {
        Self::new([from.x, from.y], [to.x, to.y])
    }

    /// Both endpoints coincide
    pub const fn is_degenerate(&self) -> bool {
        self.start[0] == self.end[0] && self.start[1] == self.end[1]
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.start[0], self.start[1], self.end[0], self.end[1]
        )
    }
}

/// Derive the closed-wall outline of a maze
///
/// Emits the top border with a gap above the entrance cell, the left border,
/// and the bottom border with a gap below the exit cell, then walks the cells
/// row by row emitting each closed bottom wall (skipped on the last row,
/// which the bottom border covers) and each closed right wall. Last-column
/// right walls are never open, so they draw the right border.
pub fn wall_segments(dimensions: GridDimensions, passages: &IndexBitset) -> Vec<LineSegment> {
    let width = dimensions.width();
    let height = dimensions.height();
    let closed_internal = dimensions.internal_wall_count().saturating_sub(passages.count());
    let mut segments = Vec::with_capacity(3 + height + closed_internal);

    let borders = [
        LineSegment::horizontal(0, 1, width),
        LineSegment::vertical(0, 0, height),
        LineSegment::horizontal(height, 0, width - 1),
    ];
    segments.extend(borders.into_iter().filter(|segment| !segment.is_degenerate()));

    for cell in 0..dimensions.area() {
        let Position { x, y } = dimensions.position_of(cell);
        if y + 1 < height && !passages.contains(WallId::bottom_of(cell).index()) {
            segments.push(LineSegment::horizontal(y + 1, x, x + 1));
        }
        if !passages.contains(WallId::right_of(cell).index()) {
            segments.push(LineSegment::vertical(x + 1, y, y + 1));
        }
    }

    segments
}
