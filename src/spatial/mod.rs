//! Spatial data structures for rectangular mazes
//!
//! This module contains spatial-related functionality including:
//! - Cell, wall and direction addressing
//! - Line-segment geometry for the external renderer

/// Line-segment output geometry
pub mod geometry;
/// Cell, wall and direction addressing
pub mod grid;

pub use geometry::LineSegment;
pub use grid::{Direction, GridDimensions, Position, WallId, WallRelation};
