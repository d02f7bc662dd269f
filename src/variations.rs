//! Tint, shade, and tone ladders.
//!
//! A ladder starts at the base color and walks toward white (tints), black
//! (shades), or gray (tones) in even Oklch steps, stopping one rung short of
//! the extreme so every color stays usable.

use crate::cli::VariationKind;
use crate::color::Color;

/// Build the ladder for `kind`: the base color followed by `steps` rungs.
pub fn variations(base: Color, kind: VariationKind, steps: usize) -> Vec<Color> {
    match kind {
        VariationKind::Tints => tints(base, steps),
        VariationKind::Shades => shades(base, steps),
        VariationKind::Tones => tones(base, steps),
    }
}

/// Steps toward white: lightness rises by even fractions of the headroom.
pub fn tints(base: Color, steps: usize) -> Vec<Color> {
    let headroom = 1.0 - base.to_oklch().l;
    ladder(base, steps, |fraction| {
        base.adjust_lightness(headroom * fraction)
    })
}

/// Steps toward black: lightness falls by even fractions of itself.
pub fn shades(base: Color, steps: usize) -> Vec<Color> {
    let depth = base.to_oklch().l;
    ladder(base, steps, |fraction| {
        base.adjust_lightness(-depth * fraction)
    })
}

/// Steps toward gray: chroma falls by even fractions of itself.
pub fn tones(base: Color, steps: usize) -> Vec<Color> {
    let chroma = base.to_oklch().chroma;
    ladder(base, steps, |fraction| base.adjust_chroma(-chroma * fraction))
}

fn ladder(base: Color, steps: usize, rung: impl Fn(f32) -> Color) -> Vec<Color> {
    let mut colors = Vec::with_capacity(steps + 1);
    colors.push(base);
    for i in 1..=steps {
        // Fractions run up to steps/(steps+1), never a full 1.0.
        colors.push(rung(i as f32 / (steps + 1) as f32));
    }
    colors
}
