use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static puzzle dataset produced out-of-band by the pre-processor.
/// Loaded once as a JSON asset and inserted as a resource, read-only afterwards.
#[derive(Resource, Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Unscaled box positions.
    pub boxes: Vec<[f64; 3]>,
    /// `(from, to)` index pairs into `boxes`.
    pub edges: Vec<(usize, usize)>,
    /// Factor applied to every coordinate before use.
    pub scale: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum PuzzleDataError {
    #[error("edge {edge} references box {index} but the dataset only has {len} boxes")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        len: usize,
    },
    #[error("dataset scale {0} is not a finite number")]
    NonFiniteScale(f64),
}

impl PuzzleData {
    /// All box positions after scaling, in dataset order.
    pub fn scaled_boxes(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.boxes.iter().map(|point| self.scale_point(point))
    }

    /// Check the invariants the scene builder relies on.
    pub fn validate(&self) -> Result<(), PuzzleDataError> {
        if !self.scale.is_finite() {
            return Err(PuzzleDataError::NonFiniteScale(self.scale));
        }

        let len = self.boxes.len();
        for (edge, &(from, to)) in self.edges.iter().enumerate() {
            if let Some(index) = [from, to].into_iter().find(|&index| index >= len) {
                return Err(PuzzleDataError::EdgeOutOfRange { edge, index, len });
            }
        }

        Ok(())
    }

    fn scale_point(&self, point: &[f64; 3]) -> Vec3 {
        Vec3::new(
            (point[0] * self.scale) as f32,
            (point[1] * self.scale) as f32,
            (point[2] * self.scale) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PuzzleData {
        PuzzleData {
            boxes: vec![[0.0, 0.0, 0.0], [10.0, 4.0, 10.0]],
            edges: vec![(0, 1)],
            scale: 2.0,
        }
    }

    #[test]
    fn deserialises_pre_processor_output() {
        let json = r#"{ "scale": 0.01, "boxes": [[162, 817, 812], [57, 618, 57]], "edges": [[0, 1], [1, 0]] }"#;
        let data: PuzzleData = serde_json::from_str(json).unwrap();
        assert_eq!(data.boxes[1], [57.0, 618.0, 57.0]);
        assert_eq!(data.edges, vec![(0, 1), (1, 0)]);
        assert_eq!(data.scale, 0.01);
    }

    #[test]
    fn scaling_applies_to_every_axis() {
        let points: Vec<Vec3> = sample().scaled_boxes().collect();
        assert_eq!(points, vec![Vec3::ZERO, Vec3::new(20.0, 8.0, 20.0)]);
    }

    #[test]
    fn valid_dataset_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn reports_first_out_of_range_edge() {
        let mut data = sample();
        data.edges.push((1, 5));
        assert_eq!(
            data.validate(),
            Err(PuzzleDataError::EdgeOutOfRange {
                edge: 1,
                index: 5,
                len: 2
            })
        );
    }

    #[test]
    fn rejects_non_finite_scale() {
        let mut data = sample();
        data.scale = f64::NAN;
        assert!(matches!(
            data.validate(),
            Err(PuzzleDataError::NonFiniteScale(_))
        ));
    }
}
