//! App icon rasterizer
//!
//! One-shot conversion of the vector logo into the fixed PNG icon set
//! the app ships with. The SVG is parsed once, then rendered scaled to
//! fit each target square on a transparent background.

use std::path::{Path, PathBuf};

use resvg::{tiny_skia, usvg};
use thiserror::Error;

/// Target sizes and file names, matching the shipped asset set.
pub const ICON_OUTPUTS: [(u32, &str); 4] = [
    (1024, "icon.png"),
    (1024, "adaptive-icon.png"),
    (1024, "splash-icon.png"),
    (64, "favicon.png"),
];

#[derive(Debug, Error)]
pub enum IconError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse svg {path}: {source}")]
    Svg {
        path: PathBuf,
        source: usvg::Error,
    },
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pixmap allocation failed for {0}x{0}")]
    Allocation(u32),
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Rasterize `input` into the full icon set under `out_dir`.
///
/// Returns the written paths in output order. Nothing is written if the
/// input is missing or unparsable.
pub fn generate_icons(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    if !input.exists() {
        return Err(IconError::MissingInput(input.to_path_buf()));
    }

    let data = std::fs::read(input).map_err(|source| IconError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let tree =
        usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|source| IconError::Svg {
            path: input.to_path_buf(),
            source,
        })?;

    std::fs::create_dir_all(out_dir).map_err(|source| IconError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ICON_OUTPUTS.len());
    for (size, file) in ICON_OUTPUTS {
        let out_path = out_dir.join(file);
        render_png(&tree, size, &out_path)?;
        tracing::info!("Wrote {} ({}x{})", out_path.display(), size, size);
        written.push(out_path);
    }

    Ok(written)
}

/// Render the tree into a transparent `size`x`size` PNG, scaled to fit
/// and centered (contain semantics).
fn render_png(tree: &usvg::Tree, size: u32, out_path: &Path) -> Result<(), IconError> {
    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or(IconError::Allocation(size))?;

    let source = tree.size();
    let scale = (size as f32 / source.width()).min(size as f32 / source.height());
    let tx = (size as f32 - source.width() * scale) / 2.0;
    let ty = (size as f32 - source.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

    resvg::render(tree, transform, &mut pixmap.as_mut());

    // tiny-skia keeps premultiplied alpha; undo it for the PNG
    let mut img = image::RgbaImage::new(size, size);
    for (i, px) in pixmap.pixels().iter().enumerate() {
        let c = px.demultiply();
        let x = i as u32 % size;
        let y = i as u32 / size;
        img.put_pixel(x, y, image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }

    img.save(out_path).map_err(|source| IconError::Encode {
        path: out_path.to_path_buf(),
        source,
    })
}
