/// Stage dataset assembly and JSON output
use crate::junction_box::JunctionBox;
use crate::neighbours::{Edge, nearest_neighbour_edges};
use constants::dataset::display_scale;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Dataset consumed by the stage viewer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleData {
    pub scale: f64,
    pub boxes: Vec<JunctionBox>,
    pub edges: Vec<Edge>,
}

impl PuzzleData {
    /// Link the boxes and derive a display scale from their largest coordinate.
    pub fn from_boxes(boxes: Vec<JunctionBox>) -> Self {
        let edges = nearest_neighbour_edges(&boxes);
        let scale = display_scale(max_coordinate(&boxes));
        Self {
            scale,
            boxes,
            edges,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn max_coordinate(boxes: &[JunctionBox]) -> f64 {
    boxes
        .iter()
        .flat_map(|b| [b.0, b.1, b.2])
        .max()
        .unwrap_or(1) as f64
}
