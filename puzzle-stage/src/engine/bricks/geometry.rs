use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::render_settings::MARKER_SUBDIVISIONS;

use crate::engine::colour::colour_for_index;

/// Low-poly sphere shared by every marker.
pub fn marker_mesh(radius: f32) -> Mesh {
    let sphere = Sphere::new(radius);
    match sphere.mesh().ico(MARKER_SUBDIVISIONS) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("Falling back to UV sphere for markers: {err}");
            sphere.mesh().uv(8, 6)
        }
    }
}

/// One line segment per edge, each end coloured like the marker it touches.
/// Edges that reference a missing point are skipped with a warning.
///
/// Returns the mesh and the number of segments it holds.
pub fn edge_lines_mesh(points: &[Vec3], edges: &[(usize, usize)]) -> (Mesh, usize) {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(edges.len() * 2);
    let mut colours: Vec<[f32; 4]> = Vec::with_capacity(edges.len() * 2);

    for (edge, &(from, to)) in edges.iter().enumerate() {
        let (Some(start), Some(end)) = (points.get(from), points.get(to)) else {
            warn!(
                "Skipping edge {edge} ({from}, {to}): only {} boxes in dataset",
                points.len()
            );
            continue;
        };

        positions.push(start.to_array());
        positions.push(end.to_array());
        colours.push(colour_for_index(from).to_linear_rgba());
        colours.push(colour_for_index(to).to_linear_rgba());
    }

    let segments = positions.len() / 2;
    let mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colours);

    (mesh, segments)
}
