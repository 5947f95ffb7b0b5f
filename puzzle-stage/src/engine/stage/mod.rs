//! Stage: scene root, camera, orbit controls and the per-frame driver.
//!
//! Every frame runs three ordered phases on the `Update` schedule:
//! [`StageSet::Listeners`] reacts to resize and keyboard input,
//! [`StageSet::Controls`] steps the orbit rig and syncs the camera, then
//! [`StageSet::Content`] runs the updates registered through
//! [`StageAppExt::add_frame_update`]. Rendering follows in the render sub-app.

/// Frame loop runner and cooperative cancellation.
pub mod frame_loop;

/// Resize and keyboard listeners with explicit attach and teardown.
pub mod listeners;

use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::path::CANVAS_SELECTOR;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION, CLEAR_COLOUR,
};

use crate::engine::camera::orbit_controller::{
    StageCamera, orbit_input_system, orbit_update_system,
};
use crate::engine::camera::orbit_rig::OrbitRig;
use crate::engine::colour::hex_colour;
use crate::engine::scene::{floor::spawn_floor, lights::spawn_lights};
use frame_loop::{CancellationToken, FrameLimit, cancel_at_frame_limit, exit_on_cancel};
use listeners::{
    StageListeners, StageTeardown, handle_keyboard_pan, handle_window_resize, teardown_stage,
};

/// Stage construction options.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// CSS selector of the canvas the renderer binds to on the web.
    pub container: String,
    pub camera_near: f32,
    pub camera_far: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            container: CANVAS_SELECTOR.to_string(),
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
        }
    }
}

/// Size of the output surface the stage renders into, in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StageSurface {
    pub width: f32,
    pub height: f32,
}

impl StageSurface {
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for StageSurface {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageSet {
    Listeners,
    Controls,
    Content,
}

pub struct StagePlugin {
    pub config: StageConfig,
}

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(ClearColor(hex_colour(CLEAR_COLOUR)))
            .insert_resource(OrbitRig::new(
                Vec3::from_array(CAMERA_START_POSITION),
                Vec3::ZERO,
            ))
            .init_resource::<StageSurface>()
            .init_resource::<CancellationToken>()
            .add_event::<StageTeardown>()
            .configure_sets(
                Update,
                (
                    StageSet::Listeners.run_if(resource_exists::<StageListeners>),
                    StageSet::Controls,
                    StageSet::Content,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_stage, spawn_floor, spawn_lights))
            .add_systems(Update, teardown_stage.before(StageSet::Listeners))
            .add_systems(
                Update,
                (handle_window_resize, handle_keyboard_pan).in_set(StageSet::Listeners),
            )
            .add_systems(
                Update,
                (orbit_input_system, orbit_update_system)
                    .chain()
                    .in_set(StageSet::Controls),
            )
            .add_systems(
                Update,
                (
                    cancel_at_frame_limit.run_if(resource_exists::<FrameLimit>),
                    exit_on_cancel,
                )
                    .chain()
                    .after(StageSet::Content),
            );
    }
}

/// Registration of per-frame content updates on the stage's frame driver.
pub trait StageAppExt {
    /// Run `systems` every frame after the orbit controls have been stepped.
    fn add_frame_update<M>(
        &mut self,
        systems: impl IntoScheduleConfigs<ScheduleSystem, M>,
    ) -> &mut Self;
}

impl StageAppExt for App {
    fn add_frame_update<M>(
        &mut self,
        systems: impl IntoScheduleConfigs<ScheduleSystem, M>,
    ) -> &mut Self {
        self.add_systems(Update, systems.in_set(StageSet::Content))
    }
}

/// Spawn the camera at the rig's pose and attach the listeners.
pub fn setup_stage(
    mut commands: Commands,
    config: Res<StageConfig>,
    rig: Res<OrbitRig>,
    mut surface: ResMut<StageSurface>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if let Ok(window) = windows.single() {
        surface.width = window.width();
        surface.height = window.height();
    }

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: surface.aspect_ratio(),
            near: config.camera_near,
            far: config.camera_far,
        }),
        Transform::from_translation(rig.position).looking_at(rig.target, Vec3::Y),
        StageCamera,
    ));

    commands.insert_resource(StageListeners);
    info!(
        "Stage ready: {}x{} surface, camera at {}",
        surface.width, surface.height, rig.position
    );
}
