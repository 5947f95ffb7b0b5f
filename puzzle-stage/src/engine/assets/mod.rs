//! Dataset types for the puzzle scene.
//!
//! Holds the static puzzle dataset loaded from JSON and the ground-plane
//! bounds derived from it.

/// Ground-plane bounds of the scaled markers and the initial camera focus.
pub mod bounds;

/// Puzzle dataset asset: box positions, edges and display scale.
pub mod puzzle_data;
