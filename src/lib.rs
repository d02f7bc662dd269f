//! Palette extraction and color-design utilities.
//!
//! `tinct` pulls the dominant colors out of an image and answers the
//! questions a designer asks about them: which text color stays readable,
//! how a pair scores against the WCAG 2.1 contrast thresholds, what the
//! classic harmonies and tint/shade/tone ladders around a color look like,
//! and how a palette reads as CSS, SCSS, JSON, or a plain hex list.
//!
//! # Example
//!
//! ```
//! use tinct::color::Color;
//! use tinct::contrast;
//!
//! let background = Color::from_hex("#1E293B").unwrap();
//! let text = contrast::readable_text_color(background);
//! assert_eq!(text, Color::WHITE);
//!
//! let evaluation = contrast::evaluate(background, text);
//! assert!(evaluation.conformance.small_aaa);
//! ```

pub mod cli;
pub mod color;
pub mod contrast;
pub mod extract;
pub mod favorites;
pub mod harmony;
pub mod snippet;
pub mod tui;
pub mod variations;
