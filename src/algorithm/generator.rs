//! Perfect maze generation by randomized frontier growth
//!
//! The maze grows outwards from a random cell. Each step removes a random
//! wall from the frontier; a wall with exactly one visited side is carved
//! into a passage and the newly reached cell contributes its own walls,
//! while a wall with both sides visited is dropped. Never joining two
//! visited cells keeps the passage graph acyclic, so the result is a
//! spanning tree with exactly one route between any two cells.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::bitset::IndexBitset;
use crate::algorithm::frontier::Frontier;
use crate::io::configuration::Configuration;
use crate::io::error::{MazeError, Result};
use crate::spatial::geometry::{LineSegment, wall_segments};
use crate::spatial::grid::{Direction, GridDimensions, Position, WallId};

/// A generated maze: grid size, open passages and derived wall outline
///
/// Immutable once built. A new round replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    dimensions: GridDimensions,
    passages: IndexBitset,
    segments: Vec<LineSegment>,
}

impl Maze {
    /// Build a maze from an explicit list of open walls
    ///
    /// The passages are not required to form a spanning tree.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidWall`] if a wall id does not separate two
    /// cells of the configured grid
    pub fn with_passages(
        config: Configuration,
        walls: impl IntoIterator<Item = WallId>,
    ) -> Result<Self> {
        let dimensions = config.dimensions();
        let mut passages = IndexBitset::new(dimensions.wall_capacity());
        for wall in walls {
            if !dimensions.is_internal_wall(wall) {
                return Err(MazeError::InvalidWall {
                    wall: wall.index(),
                    width: dimensions.width(),
                    height: dimensions.height(),
                });
            }
            passages.insert(wall.index());
        }
        Ok(Self::from_passages(dimensions, passages))
    }

    fn from_passages(dimensions: GridDimensions, passages: IndexBitset) -> Self {
        let segments = wall_segments(dimensions, &passages);
        Self {
            dimensions,
            passages,
            segments,
        }
    }

    /// Grid addressing for this maze
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.width()
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.height()
    }

    /// Cell where every trace starts
    pub const fn entrance(&self) -> Position {
        Position::new(0, 0)
    }

    /// Cell a trace must reach to solve the maze
    pub const fn exit(&self) -> Position {
        Position::new(self.width() - 1, self.height() - 1)
    }

    /// Test whether a wall has been carved into a passage
    pub fn is_open(&self, wall: WallId) -> bool {
        self.passages.contains(wall.index())
    }

    /// Test whether two cells are adjacent and joined by a passage
    pub fn is_passable(&self, from: Position, to: Position) -> bool {
        if !self.dimensions.contains(from) || !self.dimensions.contains(to) {
            return false;
        }
        self.dimensions
            .wall_between(
                self.dimensions.cell_index(from),
                self.dimensions.cell_index(to),
            )
            .is_some_and(|wall| self.is_open(wall))
    }

    /// Number of open walls
    pub fn passage_count(&self) -> usize {
        self.passages.count()
    }

    /// Open walls in ascending id order
    pub fn open_walls(&self) -> impl Iterator<Item = WallId> + '_ {
        self.passages.iter().map(WallId::from_index)
    }

    /// Moves that stay in the grid and cross an open wall
    pub fn open_moves(&self, from: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            self.dimensions
                .step(from, direction)
                .filter(|&to| self.is_passable(from, to))
                .map(|to| (direction, to))
        })
    }

    /// Closed-wall outline in corner units
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }
}

/// Generate a perfect maze, drawing all randomness from `rng`
///
/// Identical random draws yield an identical maze.
pub fn generate<R: Rng + ?Sized>(config: Configuration, rng: &mut R) -> Maze {
    let dimensions = config.dimensions();
    let mut growth = Growth::new(dimensions);

    let start = rng.random_range(0..dimensions.area());
    growth.visit(start, None);

    let mut peak_frontier = growth.frontier.len();
    while let Some(wall) = growth.frontier.take_random(rng) {
        growth.handle_wall(wall);
        peak_frontier = peak_frontier.max(growth.frontier.len());
    }

    debug_assert_eq!(growth.visited.count(), dimensions.area());
    debug_assert_eq!(growth.passages.count(), dimensions.area() - 1);
    log::debug!(
        "Generated {}x{} maze from start cell {} ({} passages, frontier peaked at {} walls)",
        dimensions.width(),
        dimensions.height(),
        dimensions.position_of(start),
        growth.passages.count(),
        peak_frontier
    );

    Maze::from_passages(dimensions, growth.passages)
}

/// Generation state, discarded once the maze is built
struct Growth {
    dimensions: GridDimensions,
    visited: IndexBitset,
    passages: IndexBitset,
    frontier: Frontier,
}

impl Growth {
    fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            visited: IndexBitset::new(dimensions.area()),
            passages: IndexBitset::new(dimensions.wall_capacity()),
            frontier: Frontier::new(dimensions.wall_capacity()),
        }
    }

    fn is_visited(&self, cell: usize) -> bool {
        self.visited.contains(cell)
    }

    /// Mark a cell visited and queue its walls, skipping the one just carved
    fn visit(&mut self, cell: usize, from_wall: Option<WallId>) {
        self.visited.insert(cell);
        for wall in self.dimensions.boundary_walls(cell) {
            debug_assert!(!self.passages.contains(wall.index()) || Some(wall) == from_wall);
            self.frontier.push(wall, from_wall);
        }
    }

    fn handle_wall(&mut self, wall: WallId) {
        let Some((cell_a, cell_b)) = self.dimensions.wall_cells(wall) else {
            unreachable!("frontier wall {wall} does not separate two cells");
        };

        match (self.is_visited(cell_a), self.is_visited(cell_b)) {
            (true, false) => {
                self.passages.insert(wall.index());
                self.visit(cell_b, Some(wall));
            }
            (false, true) => {
                self.passages.insert(wall.index());
                self.visit(cell_a, Some(wall));
            }
            // Both sides already belong to the tree: carving would close a cycle
            (true, true) => {}
            (false, false) => {
                unreachable!("frontier wall {wall} borders no visited cell");
            }
        }
    }
}

/// Maze factory owning its random source
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator from a fixed seed, or from OS entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
        }
    }

    /// Create a generator around an existing random source
    pub const fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Validate a size and generate a maze of it
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Configuration`] if either side is zero or too large
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Maze> {
        let config = Configuration::new(width, height)?;
        Ok(self.generate_with(config))
    }

    /// Generate a maze of an already validated size
    pub fn generate_with(&mut self, config: Configuration) -> Maze {
        generate(config, &mut self.rng)
    }
}
