//! Puzzle content: one coloured marker per box and one line per edge.
//!
//! Built once when the dataset becomes available. The orbit target is moved
//! to the centre of the markers' ground footprint so the camera starts
//! looking at the puzzle.

/// Marker and edge-line mesh construction.
pub mod geometry;

use bevy::prelude::*;
use constants::render_settings::MARKER_RADIUS;
use std::collections::HashMap;

use crate::engine::assets::bounds::SceneBounds;
use crate::engine::assets::puzzle_data::PuzzleData;
use crate::engine::camera::orbit_rig::OrbitRig;
use crate::engine::colour::{IndexColour, colour_for_index};
use crate::engine::core::app_state::AppState;
use crate::engine::stage::StageAppExt;
use geometry::{edge_lines_mesh, marker_mesh};

/// How the puzzle content is drawn.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BrickStyle {
    pub marker_radius: f32,
    pub show_edges: bool,
}

impl BrickStyle {
    /// Markers without connecting lines.
    pub fn markers_only() -> Self {
        Self {
            show_edges: false,
            ..default()
        }
    }
}

impl Default for BrickStyle {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            show_edges: true,
        }
    }
}

#[derive(Component, Debug)]
pub struct Marker {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct EdgeLines;

/// Summary of the spawned content.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Bricks {
    pub centre_at_ground: Vec3,
    pub marker_count: usize,
    pub edge_count: usize,
}

pub struct BricksPlugin {
    pub style: BrickStyle,
}

impl Plugin for BricksPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.style)
            .add_systems(OnEnter(AppState::Running), spawn_bricks)
            .add_frame_update(update_bricks.run_if(in_state(AppState::Running)));
    }
}

pub fn spawn_bricks(
    mut commands: Commands,
    data: Res<PuzzleData>,
    style: Res<BrickStyle>,
    mut rig: ResMut<OrbitRig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let points: Vec<Vec3> = data.scaled_boxes().collect();
    let marker = meshes.add(marker_mesh(style.marker_radius));
    let mut marker_materials: HashMap<IndexColour, Handle<StandardMaterial>> = HashMap::new();

    for (index, point) in points.iter().enumerate() {
        let colour = colour_for_index(index);
        let material = marker_materials
            .entry(colour)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: colour.to_color(),
                    ..default()
                })
            })
            .clone();

        commands.spawn((
            Mesh3d(marker.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(*point),
            Marker { index },
        ));
    }

    let centre_at_ground = SceneBounds::from_points(points.iter().copied()).centre_at_ground();
    rig.set_target(centre_at_ground);

    let edge_count = if style.show_edges {
        let (mesh, segments) = edge_lines_mesh(&points, &data.edges);
        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        });
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material),
            Transform::default(),
            EdgeLines,
        ));
        segments
    } else {
        0
    };

    info!(
        "Spawned {} markers and {} edges, focus {}",
        points.len(),
        edge_count,
        centre_at_ground
    );

    commands.insert_resource(Bricks {
        centre_at_ground,
        marker_count: points.len(),
        edge_count,
    });
}

/// Per-frame hook for the puzzle content. The puzzle is static, so there is
/// nothing to advance yet.
pub fn update_bricks() {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::headless_app;

    fn bricks_app(data: PuzzleData, style: BrickStyle) -> App {
        let mut app = headless_app();
        app.insert_resource(OrbitRig::default())
            .insert_resource(data)
            .add_plugins(BricksPlugin { style });
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();
        app
    }

    fn two_boxes() -> PuzzleData {
        PuzzleData {
            boxes: vec![[0.0, 0.0, 0.0], [10.0, 0.0, 10.0]],
            edges: vec![(0, 1)],
            scale: 1.0,
        }
    }

    #[test]
    fn spawns_markers_edges_and_focuses_camera() {
        let mut app = bricks_app(two_boxes(), BrickStyle::default());

        let bricks = app.world().resource::<Bricks>().clone();
        assert_eq!(bricks.marker_count, 2);
        assert_eq!(bricks.edge_count, 1);
        assert_eq!(bricks.centre_at_ground, Vec3::new(5.0, 1.0, 5.0));
        assert_eq!(
            app.world().resource::<OrbitRig>().target,
            Vec3::new(5.0, 1.0, 5.0)
        );

        let world = app.world_mut();
        let mut markers = world.query::<(&Marker, &Transform)>();
        let mut placed: Vec<_> = markers
            .iter(world)
            .map(|(marker, transform)| (marker.index, transform.translation))
            .collect();
        placed.sort_by_key(|(index, _)| *index);
        assert_eq!(
            placed,
            vec![(0, Vec3::ZERO), (1, Vec3::new(10.0, 0.0, 10.0))]
        );
        assert_eq!(world.query::<&EdgeLines>().iter(world).count(), 1);
    }

    #[test]
    fn scale_moves_markers_and_focus() {
        let mut data = two_boxes();
        data.scale = 2.0;
        let app = bricks_app(data, BrickStyle::default());
        assert_eq!(
            app.world().resource::<Bricks>().centre_at_ground,
            Vec3::new(10.0, 1.0, 10.0)
        );
    }

    #[test]
    fn markers_only_style_draws_no_edges() {
        let mut app = bricks_app(two_boxes(), BrickStyle::markers_only());
        assert_eq!(app.world().resource::<Bricks>().edge_count, 0);
        let world = app.world_mut();
        assert_eq!(world.query::<&EdgeLines>().iter(world).count(), 0);
        assert_eq!(world.query::<&Marker>().iter(world).count(), 2);
    }

    #[test]
    fn empty_dataset_focuses_on_origin() {
        let data = PuzzleData {
            boxes: Vec::new(),
            edges: Vec::new(),
            scale: 1.0,
        };
        let app = bricks_app(data, BrickStyle::default());
        let bricks = app.world().resource::<Bricks>();
        assert_eq!(bricks.marker_count, 0);
        assert_eq!(bricks.centre_at_ground, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn markers_with_the_same_hue_share_a_material() {
        let data = PuzzleData {
            boxes: vec![[0.0, 0.0, 0.0]; 361],
            edges: Vec::new(),
            scale: 1.0,
        };
        let mut app = bricks_app(data, BrickStyle::default());
        let world = app.world_mut();
        let mut markers = world.query::<(&Marker, &MeshMaterial3d<StandardMaterial>)>();
        let by_index: HashMap<usize, AssetId<StandardMaterial>> = markers
            .iter(world)
            .map(|(marker, material)| (marker.index, material.id()))
            .collect();
        assert_eq!(by_index[&0], by_index[&360]);
        assert_ne!(by_index[&0], by_index[&1]);
    }
}
