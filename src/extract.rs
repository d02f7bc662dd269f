use std::path::Path;

use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use kmeans_colors::get_kmeans_hamerly;
use palette::{IntoColor, Lab, Srgb};
use tracing::debug;

use crate::color::Color;

/// A dominant color pulled out of an image, with the share of pixels that
/// landed in its cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Color,
    pub weight: f32,
}

const MAX_DIM: u32 = 256;
const MAX_ITER: usize = 20;
const CONVERGE: f32 = 5.0;
const SEED: u64 = 42;
/// Centroids closer than this ΔE in CIELAB are treated as the same color.
const MERGE_DELTA_E: f32 = 5.0;

/// Decode an image from disk at full resolution.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| {
        if path.exists() {
            format!(
                "cannot decode {} as an image (PNG, JPEG, GIF, WebP, BMP and TIFF are supported)",
                path.display()
            )
        } else {
            format!("file not found: {}", path.display())
        }
    })
}

/// Downscale to fit within 256x256 (aspect preserved) and flatten to RGB.
///
/// Extraction quality does not improve past this size, it only gets slower.
pub fn prepare(img: DynamicImage) -> RgbImage {
    let (width, height) = (img.width(), img.height());
    let img = if width > MAX_DIM || height > MAX_DIM {
        let resized = img.resize(MAX_DIM, MAX_DIM, FilterType::Lanczos3);
        debug!(
            "resized {}x{} image to {}x{}",
            width,
            height,
            resized.width(),
            resized.height()
        );
        resized
    } else {
        img
    };
    img.to_rgb8()
}

/// Read one pixel as a color, with bounds checking. Origin is top left.
pub fn sample_pixel(img: &RgbImage, x: u32, y: u32) -> Result<Color> {
    if x >= img.width() || y >= img.height() {
        bail!(
            "pixel ({x}, {y}) is outside the {}x{} image",
            img.width(),
            img.height()
        );
    }
    let p = img.get_pixel(x, y);
    Ok(Color::new(p[0], p[1], p[2]))
}

/// Convert every pixel to CIELAB for clustering.
pub fn lab_pixels(img: &RgbImage) -> Vec<Lab> {
    img.pixels()
        .map(|p| {
            let srgb: Srgb<f32> = Srgb::new(p[0], p[1], p[2]).into_format();
            srgb.into_color()
        })
        .collect()
}

/// Run K-means over LAB pixels and return the dominant colors.
///
/// Uses Hamerly's algorithm with a fixed seed, drops empty clusters, merges
/// near-duplicate centroids (ΔE < 5), and sorts by weight descending.
pub fn extract_palette(pixels: &[Lab], k: usize) -> Vec<Swatch> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    let result = get_kmeans_hamerly(k, MAX_ITER, CONVERGE, false, pixels, SEED);
    let total = pixels.len() as f32;

    let mut counts = vec![0u32; k];
    for &idx in &result.indices {
        counts[idx as usize] += 1;
    }

    let mut swatches: Vec<Swatch> = result
        .centroids
        .iter()
        .enumerate()
        .filter(|(i, _)| counts[*i] > 0)
        .map(|(i, lab)| Swatch {
            color: Color::from_lab(*lab),
            weight: counts[i] as f32 / total,
        })
        .collect();

    let clustered = swatches.len();
    merge_similar(&mut swatches);
    debug!(
        "k-means produced {} populated clusters, {} after merging",
        clustered,
        swatches.len()
    );

    swatches.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    swatches
}

/// Merge swatches whose centroids are within `MERGE_DELTA_E` of each other.
/// The earlier swatch keeps its color and accumulates the weight.
fn merge_similar(swatches: &mut Vec<Swatch>) {
    let mut labs: Vec<Lab> = swatches.iter().map(|s| s.color.to_lab()).collect();
    let mut i = 0;
    while i < labs.len() {
        let mut j = i + 1;
        while j < labs.len() {
            if delta_e_sq(labs[i], labs[j]) < MERGE_DELTA_E * MERGE_DELTA_E {
                swatches[i].weight += swatches[j].weight;
                swatches.remove(j);
                labs.remove(j);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

fn delta_e_sq(a: Lab, b: Lab) -> f32 {
    (a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)
}
