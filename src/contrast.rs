//! WCAG 2.1 contrast evaluation.
//!
//! Relative luminance, contrast ratio, and the four conformance thresholds
//! (AA/AAA for small and large text). All functions are pure and total; the
//! math is f64 so the black-on-white endpoint lands on 21.0 exactly.

use crate::color::Color;

/// Minimum ratio for AA conformance, small text.
pub const SMALL_AA: f64 = 4.5;
/// Minimum ratio for AAA conformance, small text.
pub const SMALL_AAA: f64 = 7.0;
/// Minimum ratio for AA conformance, large text.
pub const LARGE_AA: f64 = 3.0;
/// Minimum ratio for AAA conformance, large text.
pub const LARGE_AAA: f64 = 4.5;

/// Gamma-expand one sRGB channel to linear light.
///
/// The 0.03928 breakpoint is the value published in WCAG 2.1; scores must
/// stay bit-compatible with it.
fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0, 1]: 0 for black, 1 for white.
pub fn relative_luminance(color: Color) -> f64 {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG 2.1 contrast ratio between two colors.
///
/// `(lighter + 0.05) / (darker + 0.05)`, so the result is in [1, 21] and
/// independent of argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail against the four WCAG 2.1 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conformance {
    pub small_aa: bool,
    pub small_aaa: bool,
    pub large_aa: bool,
    pub large_aaa: bool,
}

impl Conformance {
    /// Classify a contrast ratio against the fixed thresholds.
    pub fn classify(ratio: f64) -> Self {
        Self {
            small_aa: ratio >= SMALL_AA,
            small_aaa: ratio >= SMALL_AAA,
            large_aa: ratio >= LARGE_AA,
            large_aaa: ratio >= LARGE_AAA,
        }
    }

    /// True when every threshold passes.
    pub fn passes_all(self) -> bool {
        self.small_aa && self.small_aaa && self.large_aa && self.large_aaa
    }
}

/// A full contrast evaluation of a text color against a background.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub ratio: f64,
    pub conformance: Conformance,
}

/// Evaluate `text` against `background`: ratio plus conformance verdicts.
pub fn evaluate(background: Color, text: Color) -> Evaluation {
    let ratio = contrast_ratio(background, text);
    Evaluation {
        ratio,
        conformance: Conformance::classify(ratio),
    }
}

/// Black or white, whichever the midpoint policy picks for text on
/// `background`: luminance above 0.5 gets black text, everything else white.
///
/// A fixed split on luminance, not a contrast-maximizing search over
/// candidates. The two can disagree near the midpoint; the split is the
/// documented behavior.
pub fn readable_text_color(background: Color) -> Color {
    if relative_luminance(background) > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Display form of a ratio, two decimal places: `4.48:1`.
pub fn display_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}
