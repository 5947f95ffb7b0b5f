use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::render_settings::KEYBOARD_PAN_STEP;

use super::StageSurface;
use crate::engine::camera::orbit_controller::StageCamera;
use crate::engine::camera::orbit_rig::OrbitRig;

/// Present while the stage's resize and keyboard listeners are attached.
/// Inserted by stage setup and removed on [`StageTeardown`].
#[derive(Resource, Debug, Default)]
pub struct StageListeners;

/// Detach the stage listeners. Sent once when the stage is disposed.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StageTeardown;

pub fn teardown_stage(mut commands: Commands, mut teardown: EventReader<StageTeardown>) {
    if teardown.read().last().is_some() {
        commands.remove_resource::<StageListeners>();
        info!("Stage listeners detached");
    }
}

/// Match the camera aspect ratio and tracked surface to the latest viewport size.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut surface: ResMut<StageSurface>,
    mut cameras: Query<&mut Projection, With<StageCamera>>,
) {
    let Some(latest) = resized.read().last() else {
        return;
    };

    surface.width = latest.width;
    surface.height = latest.height;

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = surface.aspect_ratio();
        }
    }
}

/// `W`/`S` raise and lower both the camera and its target, one step per
/// key-down event. Held keys keep stepping on the OS auto-repeat.
pub fn handle_keyboard_pan(mut keys: EventReader<KeyboardInput>, mut rig: ResMut<OrbitRig>) {
    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match event.key_code {
            KeyCode::KeyW => rig.translate_vertical(KEYBOARD_PAN_STEP),
            KeyCode::KeyS => rig.translate_vertical(-KEYBOARD_PAN_STEP),
            // A and D are reserved for sideways panning
            _ => {}
        }
    }
}
