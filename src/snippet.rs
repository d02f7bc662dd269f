//! Palette code snippets.
//!
//! Each format renders a list of swatches as copy-pasteable source: CSS
//! custom properties, SCSS variables, a JSON array, or a bare hex list.
//! Hex values always use the canonical uppercase form.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::SnippetKind;
use crate::color::Color;
use crate::extract::Swatch;

/// One output format for a palette.
pub trait SnippetFormat {
    /// Short format name, as used on the command line.
    fn name(&self) -> &str;

    /// Render the swatches. `name` prefixes generated variable names.
    fn serialize(&self, swatches: &[Swatch], name: &str) -> String;

    /// Render and write to `path`.
    fn write_to(&self, swatches: &[Swatch], name: &str, path: &Path) -> Result<()> {
        let content = self.serialize(swatches, name);
        std::fs::write(path, content).with_context(|| {
            format!(
                "failed to write {} snippet to {}",
                self.name(),
                path.display()
            )
        })?;
        Ok(())
    }
}

/// Look up the format implementation for a CLI format choice.
pub fn for_kind(kind: SnippetKind) -> &'static dyn SnippetFormat {
    match kind {
        SnippetKind::Css => &CssVariables,
        SnippetKind::Scss => &ScssVariables,
        SnippetKind::Json => &JsonPalette,
        SnippetKind::Hex => &HexList,
    }
}

/// Give a bare color list the uniform weights snippets expect.
pub fn equal_weights(colors: &[Color]) -> Vec<Swatch> {
    let weight = 1.0 / colors.len().max(1) as f32;
    colors
        .iter()
        .map(|&color| Swatch { color, weight })
        .collect()
}

/// CSS custom properties on `:root`.
pub struct CssVariables;

impl SnippetFormat for CssVariables {
    fn name(&self) -> &str {
        "css"
    }

    fn serialize(&self, swatches: &[Swatch], name: &str) -> String {
        let mut out = String::from(":root {\n");
        for (i, swatch) in swatches.iter().enumerate() {
            out.push_str(&format!(
                "  --{}-{}: {};\n",
                name,
                i + 1,
                swatch.color.to_hex()
            ));
        }
        out.push_str("}\n");
        out
    }
}

/// SCSS variable declarations.
pub struct ScssVariables;

impl SnippetFormat for ScssVariables {
    fn name(&self) -> &str {
        "scss"
    }

    fn serialize(&self, swatches: &[Swatch], name: &str) -> String {
        let mut out = String::new();
        for (i, swatch) in swatches.iter().enumerate() {
            out.push_str(&format!(
                "${}-{}: {};\n",
                name,
                i + 1,
                swatch.color.to_hex()
            ));
        }
        out
    }
}

/// A JSON array of `{ "hex": ..., "weight": ... }` objects.
pub struct JsonPalette;

impl SnippetFormat for JsonPalette {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, swatches: &[Swatch], _name: &str) -> String {
        let entries: Vec<_> = swatches
            .iter()
            .map(|s| json!({ "hex": s.color.to_hex(), "weight": s.weight }))
            .collect();
        let value = serde_json::Value::Array(entries);
        format!("{value:#}\n")
    }
}

/// One uppercase hex value per line.
pub struct HexList;

impl SnippetFormat for HexList {
    fn name(&self) -> &str {
        "hex"
    }

    fn serialize(&self, swatches: &[Swatch], _name: &str) -> String {
        let mut out = String::new();
        for swatch in swatches {
            out.push_str(&swatch.color.to_hex());
            out.push('\n');
        }
        out
    }
}
