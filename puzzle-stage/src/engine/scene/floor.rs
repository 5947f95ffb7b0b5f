use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::render_settings::{
    FLOOR_COLOUR, FLOOR_SIZE, GRID_COLOUR, GRID_DIVISIONS, GRID_OPACITY, GRID_SIZE,
};

use crate::engine::colour::hex_colour;

#[derive(Component)]
pub struct Floor;

#[derive(Component)]
pub struct GroundGrid;

pub fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Blended materials skip the depth prepass, so the plane never hides
    // markers that sit slightly below it.
    let floor_material = materials.add(StandardMaterial {
        base_color: hex_colour(FLOOR_COLOUR),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(floor_material),
        Transform::default(),
        Floor,
    ));

    let grid_material = materials.add(StandardMaterial {
        base_color: hex_colour(GRID_COLOUR).with_alpha(GRID_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(grid_lines_mesh(GRID_SIZE, GRID_DIVISIONS))),
        MeshMaterial3d(grid_material),
        Transform::default(),
        GroundGrid,
    ));
}

/// Square grid of `divisions` cells per side centred on the origin, as line segments.
pub fn grid_lines_mesh(size: f32, divisions: u32) -> Mesh {
    let divisions = divisions.max(1);
    let half = size / 2.0;
    let step = size / divisions as f32;

    let mut positions = Vec::with_capacity((divisions as usize + 1) * 4);
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // Line along X at fixed Z
        positions.push([-half, 0.0, offset]);
        positions.push([half, 0.0, offset]);
        // Line along Z at fixed X
        positions.push([offset, 0.0, -half]);
        positions.push([offset, 0.0, half]);
    }

    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.clone(),
            _ => panic!("grid mesh has no positions"),
        }
    }

    #[test]
    fn grid_has_two_lines_per_division_boundary() {
        let mesh = grid_lines_mesh(200.0, 40);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        assert_eq!(positions(&mesh).len(), 41 * 4);
    }

    #[test]
    fn grid_spans_size_and_lies_on_the_floor() {
        let points = positions(&grid_lines_mesh(200.0, 40));
        let max = points.iter().map(|p| p[0].abs().max(p[2].abs())).fold(0.0, f32::max);
        assert_eq!(max, 100.0);
        assert!(points.iter().all(|p| p[1] == 0.0));
        // cell size is 5 units
        assert_eq!(points[4][2] - points[0][2], 5.0);
    }

    #[test]
    fn zero_divisions_still_draws_the_border() {
        assert_eq!(positions(&grid_lines_mesh(10.0, 0)).len(), 8);
    }
}
