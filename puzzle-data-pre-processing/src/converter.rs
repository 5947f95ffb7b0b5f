/// Puzzle input converter orchestrating parsing, linking and output.
use crate::junction_box::parse_junction_boxes;
use crate::puzzle_data::PuzzleData;
use constants::path::DATA_FILE_SUFFIX;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PuzzleDataConverter {
    /// Puzzle input with one `x,y,z` junction box per line.
    input_path: PathBuf,
    /// Destination of the stage dataset JSON.
    output_path: PathBuf,
}

impl PuzzleDataConverter {
    /// Create a converter. Without an explicit output the dataset is written
    /// next to the input as `<stem>_data.json`.
    pub fn new(input_path: &str, output_path: Option<&str>) -> Self {
        let input_path = PathBuf::from(input_path);
        let output_path = output_path
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output_path(&input_path));

        Self {
            input_path,
            output_path,
        }
    }

    pub fn convert(&self) -> Result<PuzzleData, Box<dyn std::error::Error>> {
        println!("Reading puzzle input: {}", self.input_path.display());
        let input = fs::read_to_string(&self.input_path)?;
        let boxes = parse_junction_boxes(&input)?;
        println!("✓ Parsed {} junction boxes", boxes.len());

        let data = PuzzleData::from_boxes(boxes);
        println!("✓ Linked {} edges, display scale {}", data.edges.len(), data.scale);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        data.write_json(&self.output_path)?;
        println!("✓ Wrote dataset: {}", self.output_path.display());

        Ok(data)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    input_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!("{stem}{DATA_FILE_SUFFIX}"))
}
