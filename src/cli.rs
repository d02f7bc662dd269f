use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::color::Color;

/// Extract color palettes from images and check colors for readable text.
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
pub struct Args {
    /// Print debug-level progress information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the dominant colors of an image
    Extract {
        /// Path to the input image
        image: PathBuf,

        /// Number of K-means clusters to fit
        #[arg(short = 'k', long = "colors", default_value_t = 8)]
        colors: usize,

        /// Emit a code snippet instead of the readable table
        #[arg(short, long, value_enum)]
        format: Option<SnippetKind>,

        /// Palette name used for generated variable names
        #[arg(short, long, default_value = "palette")]
        name: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the color of a single pixel
    Pick {
        /// Path to the input image
        image: PathBuf,

        /// Pixel position as X,Y with the origin at the top left
        #[arg(long, value_parser = parse_point)]
        at: (u32, u32),
    },

    /// Evaluate WCAG contrast of a text color against a background
    Contrast {
        /// Background color, e.g. #1E293B
        background: Color,

        /// Text color
        text: Color,
    },

    /// Pick black or white text for a background color
    Textcolor {
        /// Background color
        background: Color,
    },

    /// Build a color scheme around a base color
    Harmony {
        /// Base color
        color: Color,

        /// Which hue geometry to use
        #[arg(short, long, value_enum, default_value = "complement")]
        scheme: Scheme,
    },

    /// Build a tint, shade, or tone ladder from a base color
    Variations {
        /// Base color
        color: Color,

        /// Direction of the ladder
        #[arg(long, value_enum, default_value = "tints")]
        kind: VariationKind,

        /// Number of derived colors
        #[arg(long, default_value_t = 4)]
        steps: usize,
    },

    /// Render a code snippet for an explicit list of colors
    Snippet {
        /// Output format
        #[arg(value_enum)]
        format: SnippetKind,

        /// Colors to include, in order
        #[arg(required = true)]
        colors: Vec<Color>,

        /// Palette name used for generated variable names
        #[arg(short, long, default_value = "palette")]
        name: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage saved colors
    #[command(subcommand)]
    Fav(FavCommand),

    /// Inspect an extracted palette interactively
    Preview {
        /// Path to the input image
        image: PathBuf,

        /// Number of K-means clusters to fit
        #[arg(short = 'k', long = "colors", default_value_t = 8)]
        colors: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavCommand {
    /// Save a color under a name
    Add {
        /// Color to save
        color: Color,

        /// Name to save it under
        #[arg(short, long)]
        name: String,
    },

    /// List saved colors
    List,

    /// Remove a saved color by name
    Remove {
        /// Name of the favorite to remove
        name: String,
    },

    /// Remove all saved colors
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Base color and its opposite on the wheel
    Complement,
    /// Base color with its two 30° neighbors
    Analogous,
    /// Three colors 120° apart
    Triadic,
    /// Base color with the two neighbors of its complement
    SplitComplement,
    /// Four colors 90° apart
    Tetradic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariationKind {
    /// Steps toward white
    Tints,
    /// Steps toward black
    Shades,
    /// Steps toward gray
    Tones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnippetKind {
    /// CSS custom properties on :root
    Css,
    /// SCSS variable declarations
    Scss,
    /// JSON array of hex/weight objects
    Json,
    /// One hex value per line
    Hex,
}

/// Parse a pixel position given as `X,Y`.
fn parse_point(s: &str) -> Result<(u32, u32), String> {
    let Some((x, y)) = s.split_once(',') else {
        return Err(format!("expected X,Y, got {s:?}"));
    };
    let x = x
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid x {:?}: {e}", x.trim()))?;
    let y = y
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid y {:?}: {e}", y.trim()))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_point_accepts_spaces() {
        assert_eq!(parse_point("3,5").unwrap(), (3, 5));
        assert_eq!(parse_point("10, 20").unwrap(), (10, 20));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("-1,2").is_err());
    }

    #[test]
    fn contrast_args_parse_hex_colors() {
        let args = Args::try_parse_from(["tinct", "contrast", "#1E293B", "ffffff"]).unwrap();
        match args.command {
            Command::Contrast { background, text } => {
                assert_eq!(background, Color::new(0x1E, 0x29, 0x3B));
                assert_eq!(text, Color::WHITE);
            }
            other => panic!("parsed into the wrong command: {other:?}"),
        }
    }

    #[test]
    fn malformed_color_argument_is_rejected() {
        let result = Args::try_parse_from(["tinct", "textcolor", "#12345"]);
        assert!(result.is_err());
    }

    #[test]
    fn scheme_value_names_are_kebab_case() {
        let args =
            Args::try_parse_from(["tinct", "harmony", "#336699", "--scheme", "split-complement"])
                .unwrap();
        match args.command {
            Command::Harmony { scheme, .. } => assert_eq!(scheme, Scheme::SplitComplement),
            other => panic!("parsed into the wrong command: {other:?}"),
        }
    }
}
