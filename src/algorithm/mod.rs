/// Fixed-size bitset for cell and wall membership
pub mod bitset;
/// Swap-remove wall list with O(1) membership
pub mod frontier;
/// Randomized frontier-growth perfect maze generation
pub mod generator;
/// Round lifecycle and immutable snapshots
pub mod session;
/// Command replay against maze connectivity
pub mod tracer;
