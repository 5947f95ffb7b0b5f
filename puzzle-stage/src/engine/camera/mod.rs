//! Orbit camera for the puzzle stage.
//!
//! A damped orbit rig in the style of a turntable: drag to orbit the target,
//! right-drag to pan, scroll to dolly. Deltas bleed off over several frames
//! so motion eases out after input stops.

/// Damped spherical orbit state, independent of the ECS.
pub mod orbit_rig;

/// Mouse input and transform sync systems driving the rig.
pub mod orbit_controller;
