use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum AppState {
    /// Waiting for the puzzle dataset. Floor, lights and camera are already up.
    #[default]
    Loading,
    /// Dataset available and content spawned.
    Running,
}
