//! Camera, lighting and floor settings for the stage.

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 5.0, 20.0];

/// Orbit damping factor applied per frame.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
/// Radians of orbit per pixel of drag, relative to the viewport height.
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.01;
pub const ORBIT_MAX_DISTANCE: f32 = 5000.0;

/// Vertical keyboard pan step in world units.
pub const KEYBOARD_PAN_STEP: f32 = 5.0;

/// Height of the initial orbit target above the floor.
pub const GROUND_FOCUS_HEIGHT: f32 = 1.0;

pub const CLEAR_COLOUR: u32 = 0xcccccc;

pub const FLOOR_SIZE: f32 = 2000.0;
pub const FLOOR_COLOUR: u32 = 0xcbcbcb;

pub const GRID_SIZE: f32 = 200.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_COLOUR: u32 = 0x000000;
pub const GRID_OPACITY: f32 = 0.2;

pub const KEY_LIGHT_COLOUR: u32 = 0xffffff;
pub const KEY_LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 1.0];
pub const FILL_LIGHT_COLOUR: u32 = 0x002288;
pub const FILL_LIGHT_DIRECTION: [f32; 3] = [-1.0, -1.0, -1.0];
/// Illuminance in lux for both directional lights.
pub const DIRECTIONAL_ILLUMINANCE: f32 = 3_000.0;

pub const AMBIENT_COLOUR: u32 = 0x555555;
pub const AMBIENT_BRIGHTNESS: f32 = 60.0;

pub const MARKER_RADIUS: f32 = 0.05;
pub const MARKER_SUBDIVISIONS: u32 = 1;
