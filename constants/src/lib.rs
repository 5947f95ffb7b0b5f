//! Shared configuration for the puzzle stage viewer and its data pre-processor.

pub mod colour;
pub mod dataset;
pub mod path;
pub mod render_settings;
