//! Structural analysis of generated mazes
//!
//! Breadth-first flood fill over open walls gives step distances from any
//! cell. In a perfect maze the distance field from the exit descends along
//! exactly one route, which is the solving command sequence.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::algorithm::generator::Maze;
use crate::spatial::grid::{Direction, Position};

/// Step counts from `from` to every cell, indexed `[y, x]`
///
/// Unreachable cells hold `None`.
pub fn distances(maze: &Maze, from: Position) -> Array2<Option<u32>> {
    let mut field = Array2::from_elem((maze.height(), maze.width()), None);
    if !maze.dimensions().contains(from) {
        return field;
    }

    if let Some(start) = field.get_mut([from.y, from.x]) {
        *start = Some(0);
    }
    let mut queue = VecDeque::from([(from, 0u32)]);

    while let Some((cell, distance)) = queue.pop_front() {
        for (_, next) in maze.open_moves(cell) {
            let Some(slot) = field.get_mut([next.y, next.x]) else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(distance + 1);
                queue.push_back((next, distance + 1));
            }
        }
    }

    field
}

/// Number of cells reachable from the entrance
pub fn reachable_count(maze: &Maze) -> usize {
    distances(maze, maze.entrance())
        .iter()
        .filter(|distance| distance.is_some())
        .count()
}

/// Test the spanning-tree property
///
/// A connected graph over `n` cells with exactly `n - 1` edges is a tree.
pub fn is_perfect(maze: &Maze) -> bool {
    let cells = maze.dimensions().area();
    maze.passage_count() == cells - 1 && reachable_count(maze) == cells
}

/// Cells with exactly one open neighbour
pub fn dead_ends(maze: &Maze) -> usize {
    let dimensions = maze.dimensions();
    (0..dimensions.area())
        .filter(|&cell| maze.open_moves(dimensions.position_of(cell)).count() == 1)
        .count()
}

/// Commands leading from the entrance to the exit
///
/// Returns `None` when the exit is unreachable. In a perfect maze the route
/// is unique.
pub fn solution(maze: &Maze) -> Option<Vec<Direction>> {
    let field = distances(maze, maze.exit());
    let mut current = maze.entrance();
    let mut remaining = field.get([current.y, current.x]).copied().flatten()?;
    let mut commands = Vec::with_capacity(remaining as usize);

    while remaining > 0 {
        let (direction, next) = maze.open_moves(current).find(|(_, next)| {
            field.get([next.y, next.x]).copied().flatten() == Some(remaining - 1)
        })?;
        commands.push(direction);
        current = next;
        remaining -= 1;
    }

    Some(commands)
}

/// Summary statistics of one maze
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeReport {
    /// Number of cells
    pub cells: usize,
    /// Number of open walls
    pub passages: usize,
    /// Cells with a single way in or out
    pub dead_ends: usize,
    /// Length of the entrance-to-exit route, if the exit is reachable
    pub solution_length: Option<usize>,
    /// Largest step count from the entrance to any reachable cell
    pub furthest_distance: u32,
    /// Whether the passages form a spanning tree
    pub perfect: bool,
}

impl MazeReport {
    /// Analyse a maze
    pub fn from_maze(maze: &Maze) -> Self {
        let field = distances(maze, maze.entrance());
        let furthest_distance = field.iter().filter_map(|d| *d).max().unwrap_or(0);
        Self {
            cells: maze.dimensions().area(),
            passages: maze.passage_count(),
            dead_ends: dead_ends(maze),
            solution_length: field
                .get([maze.exit().y, maze.exit().x])
                .copied()
                .flatten()
                .map(|d| d as usize),
            furthest_distance,
            perfect: is_perfect(maze),
        }
    }
}
