/// Hue step between consecutive marker indices, in degrees before wrapping.
pub const HUE_STEP: u32 = 1313;

/// Full turn of the hue wheel in degrees.
pub const HUE_WHEEL: u32 = 360;

/// Marker saturation, 0-1.
pub const MARKER_SATURATION: f32 = 1.0;

/// Marker lightness, 0-1.
pub const MARKER_LIGHTNESS: f32 = 0.5;
