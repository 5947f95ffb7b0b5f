//! Deterministic per-index colours for markers and edge endpoints.

use bevy::color::ColorToComponents;
use bevy::prelude::*;
use constants::colour::{HUE_STEP, HUE_WHEEL, MARKER_LIGHTNESS, MARKER_SATURATION};
use std::fmt;

/// Fully saturated, mid-lightness colour picked from the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexColour {
    hue: u32,
}

impl IndexColour {
    /// Hue in whole degrees, `0..360`.
    pub fn hue(&self) -> u32 {
        self.hue
    }

    pub fn to_color(self) -> Color {
        Color::hsl(self.hue as f32, MARKER_SATURATION, MARKER_LIGHTNESS)
    }

    /// Linear RGBA components, as expected by per-vertex colour attributes.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        self.to_color().to_linear().to_f32_array()
    }
}

/// CSS form, e.g. `hsl(233,100%,50%)`.
impl fmt::Display for IndexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue,
            (MARKER_SATURATION * 100.0).round() as u32,
            (MARKER_LIGHTNESS * 100.0).round() as u32
        )
    }
}

/// Colour for the marker at `index`: hue `(index * 1313) mod 360`.
pub fn colour_for_index(index: usize) -> IndexColour {
    let wheel = HUE_WHEEL as usize;
    // Reduce both factors first so large indices cannot overflow.
    let hue = (index % wheel) * (HUE_STEP as usize % wheel) % wheel;
    IndexColour { hue: hue as u32 }
}

/// Convert a `0xRRGGBB` constant into an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
