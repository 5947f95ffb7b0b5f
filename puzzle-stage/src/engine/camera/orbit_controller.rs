use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::orbit_rig::OrbitRig;
use crate::engine::stage::StageSurface;

/// Scroll in pixel units is scaled down to roughly match line units.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Marks the single perspective camera owned by the stage.
#[derive(Component, Debug, Default)]
pub struct StageCamera;

/// Queue orbit, pan and dolly deltas from mouse input.
/// Left drag orbits, right drag pans, the wheel dollies.
pub fn orbit_input_system(
    mut rig: ResMut<OrbitRig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    surface: Res<StageSurface>,
    cameras: Query<&Projection, With<StageCamera>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            rig.rotate_by_drag(mouse_delta, surface.height);
        } else if mouse_button.pressed(MouseButton::Right) {
            let fov = match cameras.single() {
                Ok(Projection::Perspective(perspective)) => perspective.fov,
                _ => return,
            };
            rig.pan(mouse_delta, surface.height, fov);
        }
    }

    let scroll: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * PIXEL_SCROLL_SCALE,
        })
        .sum();

    if scroll.abs() > f32::EPSILON {
        rig.dolly(scroll);
    }
}

/// Step the damped rig and copy its pose onto the stage camera.
pub fn orbit_update_system(
    mut rig: ResMut<OrbitRig>,
    mut cameras: Query<&mut Transform, With<StageCamera>>,
) {
    rig.update();

    for mut transform in &mut cameras {
        transform.translation = rig.position;
        transform.look_at(rig.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::headless_app;

    fn app_with_camera() -> (App, Entity) {
        let mut app = headless_app();
        app.init_resource::<StageSurface>()
            .insert_resource(OrbitRig::default())
            .add_systems(Update, (orbit_input_system, orbit_update_system).chain());
        let camera = app
            .world_mut()
            .spawn((
                StageCamera,
                Transform::default(),
                Projection::Perspective(PerspectiveProjection::default()),
            ))
            .id();
        (app, camera)
    }

    #[test]
    fn camera_follows_rig() {
        let (mut app, camera) = app_with_camera();
        app.update();

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 5.0, 20.0));
        let forward = transform.forward();
        let expected = (Vec3::ZERO - transform.translation).normalize();
        assert!(forward.dot(expected) > 0.9999);
    }

    #[test]
    fn motion_without_buttons_is_ignored() {
        let (mut app, _) = app_with_camera();
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(40.0, 0.0),
        });
        app.update();
        assert!(app.world().resource::<OrbitRig>().is_settled());
    }

    #[test]
    fn left_drag_orbits_around_target() {
        let (mut app, camera) = app_with_camera();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(-60.0, 0.0),
        });
        app.update();

        let rig = app.world().resource::<OrbitRig>();
        assert!(rig.position.x > 0.0);
        assert_eq!(rig.target, Vec3::ZERO);
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, rig.position);
    }

    #[test]
    fn wheel_dollies_toward_target() {
        let (mut app, _) = app_with_camera();
        let start = app.world().resource::<OrbitRig>().position.length();
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 2.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();

        let distance = app.world().resource::<OrbitRig>().position.length();
        approx::assert_relative_eq!(distance, start * 0.95f32.powi(2), epsilon = 1e-3);
    }
}
