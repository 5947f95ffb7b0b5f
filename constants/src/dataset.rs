/// The largest scaled coordinate lands near this value.
pub const SCALE_TARGET: f64 = 10.0;

/// Lower clamp for the decimal exponent used to derive the display scale.
pub const MIN_SCALE_EXPONENT: f64 = 1.0;

/// Upper clamp for the decimal exponent used to derive the display scale.
pub const MAX_SCALE_EXPONENT: f64 = 50.0;

/// Compute the display scale for a dataset whose largest coordinate is `max_coord`.
///
/// Coordinates are brought down to roughly `SCALE_TARGET` by dividing by the
/// nearest power of ten, never by less than 10.
pub fn display_scale(max_coord: f64) -> f64 {
    let exponent = max_coord
        .max(1.0)
        .log10()
        .round()
        .clamp(MIN_SCALE_EXPONENT, MAX_SCALE_EXPONENT);
    SCALE_TARGET / 10f64.powf(exponent)
}
