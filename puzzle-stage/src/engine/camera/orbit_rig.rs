use bevy::prelude::*;
use constants::render_settings::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED,
};
use std::f32::consts::{PI, TAU};

/// Dolly multiplier for one unit of scroll at zoom speed 1.
const ZOOM_BASE: f32 = 0.95;
/// Keeps the polar angle off the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-6;
/// Pending motion below this is treated as finished.
const SETTLE_EPSILON: f32 = 1e-6;

/// Camera position and look-at target orbiting on a sphere around the target.
///
/// Input only queues deltas; [`OrbitRig::update`] applies a damped share of
/// them each frame and is the single place the camera position moves,
/// apart from [`OrbitRig::translate_vertical`] which shifts both ends at once.
#[derive(Resource, Debug, Clone)]
pub struct OrbitRig {
    pub position: Vec3,
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Pan in the camera's view plane instead of along the ground.
    pub screen_space_panning: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending azimuth (x) and polar (y) rotation in radians.
    rotate_delta: Vec2,
    pan_offset: Vec3,
    zoom_scale: f32,
}

impl OrbitRig {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            screen_space_panning: false,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_delta: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
            zoom_scale: 1.0,
        }
    }

    /// Queue a rotation for a mouse drag of `delta` pixels in a viewport
    /// `viewport_height` pixels tall. A full-height drag is one revolution.
    pub fn rotate_by_drag(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let scale = TAU * self.rotate_speed / viewport_height;
        self.rotate_left(delta.x * scale);
        self.rotate_up(delta.y * scale);
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.rotate_delta.x -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.rotate_delta.y -= angle;
    }

    /// Queue a pan for a mouse drag of `delta` pixels. The distance moved is
    /// chosen so the point under the target tracks the cursor.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let target_distance = (self.position - self.target).length() * (fov / 2.0).tan();
        let right = self.right();

        self.pan_offset -= right * (2.0 * delta.x * target_distance / viewport_height);

        let up = if self.screen_space_panning {
            right.cross(self.forward())
        } else {
            Vec3::Y.cross(right)
        };
        self.pan_offset += up * (2.0 * delta.y * target_distance / viewport_height);
    }

    /// Queue a dolly. Positive amounts move toward the target.
    pub fn dolly(&mut self, amount: f32) {
        self.zoom_scale *= ZOOM_BASE.powf(amount * self.zoom_speed);
    }

    /// Shift camera and target vertically by the same amount, immediately.
    pub fn translate_vertical(&mut self, dy: f32) {
        self.position.y += dy;
        self.target.y += dy;
    }

    /// Move the look-at target without moving the camera.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// No queued rotation, pan or dolly remains.
    pub fn is_settled(&self) -> bool {
        self.rotate_delta.abs().max_element() < SETTLE_EPSILON
            && self.pan_offset.abs().max_element() < SETTLE_EPSILON
            && (self.zoom_scale - 1.0).abs() < SETTLE_EPSILON
    }

    /// Advance one frame. Returns whether the camera position moved.
    pub fn update(&mut self) -> bool {
        if self.is_settled() {
            self.rotate_delta = Vec2::ZERO;
            self.pan_offset = Vec3::ZERO;
            self.zoom_scale = 1.0;
            return false;
        }

        let previous = self.position;
        let offset = self.position - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        let share = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        theta += self.rotate_delta.x * share;
        phi = (phi + self.rotate_delta.y * share).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * share;

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        self.position = self.target + offset;

        if self.enable_damping {
            self.rotate_delta *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.rotate_delta = Vec2::ZERO;
            self.pan_offset = Vec3::ZERO;
        }
        self.zoom_scale = 1.0;

        previous.distance_squared(self.position) > SETTLE_EPSILON
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 5.0, 20.0), Vec3::ZERO)
    }
}
