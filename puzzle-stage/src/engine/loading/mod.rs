//! Dataset loading.
//!
//! Requests the puzzle JSON through the asset server at startup and moves the
//! app from `Loading` to `Running` once it has arrived.

/// Puzzle dataset loader resource, plugin and polling system.
pub mod data_loader;
