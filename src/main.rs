//! tinct - extract color palettes from images and check colors for readable text.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tinct::cli::{Args, Command, FavCommand, Scheme, SnippetKind, VariationKind};
use tinct::color::Color;
use tinct::contrast;
use tinct::extract::{self, Swatch};
use tinct::favorites::{Favorites, JsonFileStore};
use tinct::harmony;
use tinct::snippet;
use tinct::tui::{self, PreviewApp};
use tinct::variations;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Extract {
            image,
            colors,
            format,
            name,
            output,
        } => cmd_extract(&image, colors, format, &name, output.as_deref()),
        Command::Pick { image, at } => cmd_pick(&image, at),
        Command::Contrast { background, text } => {
            cmd_contrast(background, text);
            Ok(())
        }
        Command::Textcolor { background } => {
            println!("{}", contrast::readable_text_color(background).to_hex());
            Ok(())
        }
        Command::Harmony { color, scheme } => {
            cmd_harmony(color, scheme);
            Ok(())
        }
        Command::Variations { color, kind, steps } => {
            cmd_variations(color, kind, steps);
            Ok(())
        }
        Command::Snippet {
            format,
            colors,
            name,
            output,
        } => cmd_snippet(format, &colors, &name, output.as_deref()),
        Command::Fav(command) => cmd_fav(command),
        Command::Preview { image, colors } => cmd_preview(&image, colors),
    }
}

/// Logging goes to stderr so palette output on stdout stays pipeable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the extraction pipeline over an image file.
fn load_palette(path: &Path, k: usize) -> Result<Vec<Swatch>> {
    let img = extract::prepare(extract::open_image(path)?);
    let pixels = extract::lab_pixels(&img);
    let swatches = extract::extract_palette(&pixels, k);
    info!(
        "extracted {} color(s) from {}",
        swatches.len(),
        path.display()
    );
    Ok(swatches)
}

fn cmd_extract(
    image: &Path,
    k: usize,
    format: Option<SnippetKind>,
    name: &str,
    output: Option<&Path>,
) -> Result<()> {
    let swatches = load_palette(image, k)?;

    match format {
        Some(kind) => {
            let format = snippet::for_kind(kind);
            match output {
                Some(path) => {
                    format.write_to(&swatches, name, path)?;
                    info!("wrote {} snippet to {}", format.name(), path.display());
                }
                None => print!("{}", format.serialize(&swatches, name)),
            }
        }
        None => emit(&palette_table(&swatches), output)?,
    }
    Ok(())
}

/// The human-readable palette listing: hex, pixel share, readable text color.
fn palette_table(swatches: &[Swatch]) -> String {
    let mut out = String::new();
    for (i, swatch) in swatches.iter().enumerate() {
        let text = contrast::readable_text_color(swatch.color);
        let text_name = if text == Color::BLACK { "black" } else { "white" };
        out.push_str(&format!(
            "{:>2}  {}  {:>5.1}%  {text_name} text\n",
            i + 1,
            swatch.color.to_hex(),
            swatch.weight * 100.0
        ));
    }
    out
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn cmd_pick(image: &Path, (x, y): (u32, u32)) -> Result<()> {
    // Sample at full resolution; the extraction downscale would shift pixels.
    let img = extract::open_image(image)?.to_rgb8();
    let color = extract::sample_pixel(&img, x, y)?;
    println!("{}", color.to_hex());
    Ok(())
}

fn cmd_contrast(background: Color, text: Color) {
    let evaluation = contrast::evaluate(background, text);
    println!(
        "{} text on {}: {}",
        text.to_hex(),
        background.to_hex(),
        contrast::display_ratio(evaluation.ratio)
    );
    println!();

    let conformance = evaluation.conformance;
    println!("small text AA   {}", verdict(conformance.small_aa));
    println!("small text AAA  {}", verdict(conformance.small_aaa));
    println!("large text AA   {}", verdict(conformance.large_aa));
    println!("large text AAA  {}", verdict(conformance.large_aaa));
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

fn cmd_harmony(color: Color, scheme: Scheme) {
    for c in harmony::scheme_colors(color, scheme) {
        println!("{}", c.to_hex());
    }
}

fn cmd_variations(color: Color, kind: VariationKind, steps: usize) {
    for c in variations::variations(color, kind, steps) {
        println!("{}", c.to_hex());
    }
}

fn cmd_snippet(
    kind: SnippetKind,
    colors: &[Color],
    name: &str,
    output: Option<&Path>,
) -> Result<()> {
    let swatches = snippet::equal_weights(colors);
    let format = snippet::for_kind(kind);
    match output {
        Some(path) => {
            format.write_to(&swatches, name, path)?;
            info!("wrote {} snippet to {}", format.name(), path.display());
        }
        None => print!("{}", format.serialize(&swatches, name)),
    }
    Ok(())
}

fn cmd_fav(command: FavCommand) -> Result<()> {
    let favorites = Favorites::new(JsonFileStore::default_location());
    match command {
        FavCommand::Add { color, name } => {
            favorites.add(&name, color)?;
            println!("saved {} as {name:?}", color.to_hex());
        }
        FavCommand::List => {
            let listed = favorites.list()?;
            if listed.is_empty() {
                println!("no saved colors");
            }
            for favorite in &listed {
                println!("{:<20} {}", favorite.name, favorite.color.to_hex());
            }
        }
        FavCommand::Remove { name } => {
            let removed = favorites.remove(&name)?;
            println!("removed {:?} ({})", removed.name, removed.color.to_hex());
        }
        FavCommand::Clear => {
            favorites.clear()?;
            println!("cleared saved colors");
        }
    }
    Ok(())
}

fn cmd_preview(image: &Path, k: usize) -> Result<()> {
    let swatches = load_palette(image, k)?;
    if swatches.is_empty() {
        bail!("no colors extracted from {}", image.display());
    }

    let title = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| image.display().to_string());
    tui::run(PreviewApp::new(swatches, title))
}
