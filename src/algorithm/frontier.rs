//! Candidate wall list for randomized maze growth
//!
//! Walls live in an unordered arena; a side bitset mirrors membership so that
//! duplicate pushes are rejected in O(1) and a random wall can be taken out in
//! O(1) by swapping it with the last slot.

use rand::Rng;

use crate::algorithm::bitset::IndexBitset;
use crate::spatial::grid::WallId;

/// Walls currently eligible for random selection
#[derive(Clone, Debug)]
pub struct Frontier {
    walls: Vec<WallId>,
    members: IndexBitset,
}

impl Frontier {
    /// Create an empty frontier able to hold any id below `wall_capacity`
    pub fn new(wall_capacity: usize) -> Self {
        Self {
            walls: Vec::with_capacity(wall_capacity),
            members: IndexBitset::new(wall_capacity),
        }
    }

    /// Number of walls waiting
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Test if no walls are waiting
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Add a wall unless it is `avoid` or already present
    ///
    /// Returns true if the wall was added.
    pub fn push(&mut self, wall: WallId, avoid: Option<WallId>) -> bool {
        if avoid == Some(wall) || !self.members.insert(wall.index()) {
            return false;
        }
        self.walls.push(wall);
        true
    }

    /// Remove the wall stored in `slot`, moving the last wall into its place
    pub fn take(&mut self, slot: usize) -> Option<WallId> {
        if slot >= self.walls.len() {
            return None;
        }
        let wall = self.walls.swap_remove(slot);
        self.members.remove(wall.index());
        Some(wall)
    }

    /// Remove a uniformly chosen wall
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<WallId> {
        if self.walls.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..self.walls.len());
        self.take(slot)
    }
}
