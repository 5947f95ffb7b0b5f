use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::WindowResized;

use crate::engine::core::app_state::AppState;

/// App with the stage's resources and events but no window or renderer.
///
/// Input resources and events are registered directly instead of through
/// `InputPlugin`, so presses set by a test survive until the next `update`.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_event::<KeyboardInput>()
        .add_event::<MouseMotion>()
        .add_event::<MouseWheel>()
        .add_event::<WindowResized>()
        .init_state::<AppState>();
    app
}
