/// Nearest neighbour linking of junction boxes
use crate::junction_box::JunctionBox;
use indicatif::{ProgressBar, ProgressStyle};
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use rayon::prelude::*;
use std::collections::HashMap;

/// Index pair into the junction box list.
pub type Edge = (usize, usize);

/// Link every junction box to its nearest box at a different position.
///
/// Edges keep the input order of their `from` box. Coincident boxes share one
/// tree entry, so an edge always points at the lowest index holding the
/// nearest position. A box with no distinct neighbour (single box, or all
/// boxes coincide) produces no edge.
pub fn nearest_neighbour_edges(boxes: &[JunctionBox]) -> Vec<Edge> {
    let (positions, first_index) = distinct_positions(boxes);
    if positions.len() < 2 {
        return Vec::new();
    }
    let tree: ImmutableKdTree<f64, 3> = ImmutableKdTree::new_from_slice(&positions);

    let pb = ProgressBar::new(boxes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} boxes ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message("Linking nearest neighbours");

    let edges: Vec<Edge> = boxes
        .par_iter()
        .enumerate()
        .filter_map(|(idx, junction)| {
            // The box's own position is the only entry at distance zero
            let nearest = tree
                .nearest_n::<SquaredEuclidean>(&to_point(junction), 2)
                .into_iter()
                .find(|neighbour| neighbour.distance > 0.0)
                .map(|neighbour| first_index[neighbour.item as usize]);
            pb.inc(1);
            nearest.map(|other| (idx, other))
        })
        .collect();

    pb.finish_with_message("Neighbours linked");
    edges
}

/// Unique positions in first-seen order, with the lowest box index for each.
fn distinct_positions(boxes: &[JunctionBox]) -> (Vec<[f64; 3]>, Vec<usize>) {
    let mut seen: HashMap<JunctionBox, usize> = HashMap::with_capacity(boxes.len());
    let mut positions = Vec::with_capacity(boxes.len());
    let mut first_index = Vec::with_capacity(boxes.len());

    for (idx, junction) in boxes.iter().enumerate() {
        seen.entry(*junction).or_insert_with(|| {
            positions.push(to_point(junction));
            first_index.push(idx);
            positions.len() - 1
        });
    }

    (positions, first_index)
}

fn to_point(junction: &JunctionBox) -> [f64; 3] {
    [junction.0 as f64, junction.1 as f64, junction.2 as f64]
}
