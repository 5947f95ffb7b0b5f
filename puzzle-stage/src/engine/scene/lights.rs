use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_COLOUR, DIRECTIONAL_ILLUMINANCE, FILL_LIGHT_COLOUR,
    FILL_LIGHT_DIRECTION, KEY_LIGHT_COLOUR, KEY_LIGHT_DIRECTION,
};

use crate::engine::colour::hex_colour;

/// Directional light owned by the stage.
#[derive(Component)]
pub struct SceneLight;

/// White key light from above, blue fill light from below, low ambient.
pub fn spawn_lights(mut commands: Commands) {
    for (colour, direction) in [
        (KEY_LIGHT_COLOUR, KEY_LIGHT_DIRECTION),
        (FILL_LIGHT_COLOUR, FILL_LIGHT_DIRECTION),
    ] {
        commands.spawn((
            DirectionalLight {
                color: hex_colour(colour),
                illuminance: DIRECTIONAL_ILLUMINANCE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(direction))
                .looking_at(Vec3::ZERO, Vec3::Y),
            SceneLight,
        ));
    }

    commands.insert_resource(AmbientLight {
        color: hex_colour(AMBIENT_COLOUR),
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::headless_app;

    #[test]
    fn lights_shine_toward_the_origin() {
        let mut app = headless_app();
        app.add_systems(Startup, spawn_lights);
        app.update();

        let world = app.world_mut();
        let mut lights = world.query_filtered::<(&DirectionalLight, &Transform), With<SceneLight>>();
        let lights: Vec<_> = lights.iter(world).collect();
        assert_eq!(lights.len(), 2);

        for (_, transform) in &lights {
            let towards_origin = -transform.translation.normalize();
            assert!(transform.forward().dot(towards_origin) > 0.9999);
        }
        assert!(
            lights
                .iter()
                .any(|(light, _)| light.color == hex_colour(0x002288))
        );

        let ambient = world.resource::<AmbientLight>();
        assert_eq!(ambient.color, hex_colour(0x555555));
    }
}
