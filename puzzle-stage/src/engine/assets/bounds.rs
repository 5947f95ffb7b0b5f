use bevy::prelude::*;
use constants::render_settings::GROUND_FOCUS_HEIGHT;

/// Extent of the scaled markers on the ground (x/z) plane.
///
/// Starts at the origin rather than at the first point, so the origin is
/// always inside the bounds and an empty dataset yields `(0,0)-(0,0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SceneBounds {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::default();
        for point in points {
            bounds.include(point);
        }
        bounds
    }

    /// Grow the bounds to cover a point's ground-plane footprint.
    pub fn include(&mut self, point: Vec3) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_z = self.min_z.min(point.z);
        self.max_z = self.max_z.max(point.z);
    }

    /// Half extent of the footprint on x and z, raised to the focus height.
    /// Used as the initial orbit target.
    pub fn centre_at_ground(&self) -> Vec3 {
        Vec3::new(
            (self.max_x - self.min_x) / 2.0,
            GROUND_FOCUS_HEIGHT,
            (self.max_z - self.min_z) / 2.0,
        )
    }
}
