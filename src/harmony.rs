//! Classic hue-geometry color schemes.
//!
//! A scheme rotates the base color's Oklch hue around the wheel while
//! keeping lightness and chroma, so a muted base yields a muted scheme.

use crate::cli::Scheme;
use crate::color::Color;

/// Hue offsets in degrees for each scheme. Offset 0 is the base color.
fn hue_offsets(scheme: Scheme) -> &'static [f32] {
    match scheme {
        Scheme::Complement => &[0.0, 180.0],
        Scheme::Analogous => &[-30.0, 0.0, 30.0],
        Scheme::Triadic => &[0.0, 120.0, 240.0],
        Scheme::SplitComplement => &[0.0, 150.0, 210.0],
        Scheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
    }
}

/// Build the colors of `scheme` around `base`, base included.
pub fn scheme_colors(base: Color, scheme: Scheme) -> Vec<Color> {
    hue_offsets(scheme)
        .iter()
        .map(|&degrees| {
            if degrees == 0.0 {
                base
            } else {
                base.rotate_hue(degrees)
            }
        })
        .collect()
}
