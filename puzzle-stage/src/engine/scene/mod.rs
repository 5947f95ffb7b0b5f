//! Static scene dressing around the puzzle content.
//!
//! Spawned once during stage setup and never updated afterwards.

/// Ground plane and reference grid overlay.
///
/// A large matte plane that does not occlude markers below it, with a faint
/// line grid on top for scale.
pub mod floor;

/// Key, fill and ambient lighting.
pub mod lights;
