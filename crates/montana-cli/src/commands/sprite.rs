//! Sprite command implementation
//!
//! Renders one sprite to a PNG preview or a raw RGBA8 dump.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use montana_backend_texture::png::{write_grid_to_vec_with_hash, PngConfig};
use montana_backend_texture::{encode, TextureSynthesizer};
use montana_spec::{SpriteKind, SpriteSpec, SynthConfig};

use super::output::{write_file, AssetRecord};

/// File layout chosen from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFormat {
    /// PNG image.
    Png,
    /// Headerless row-major RGBA8 bytes, exactly what the renderer uploads.
    Rgba,
}

impl SpriteFormat {
    /// Picks the format from `path`'s extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(Self::Png),
            Some(ext) if ext.eq_ignore_ascii_case("rgba") => Ok(Self::Rgba),
            _ => bail!(
                "Unsupported sprite output '{}': use a .png or .rgba extension",
                path.display()
            ),
        }
    }
}

/// Renders `spec` and writes it to `out`.
pub fn render(
    synth: &TextureSynthesizer,
    spec: &SpriteSpec,
    flip: bool,
    out: &Path,
) -> Result<AssetRecord> {
    let format = SpriteFormat::from_path(out)?;
    let mut grid = synth.synthesize(spec);
    if flip {
        grid = grid.flip_horizontal();
    }
    let texture = encode(&grid);

    let bytes = match format {
        SpriteFormat::Png => {
            let (png, _) = write_grid_to_vec_with_hash(&grid, &PngConfig::default())
                .with_context(|| format!("Failed to encode {spec} as PNG"))?;
            png
        }
        SpriteFormat::Rgba => texture.bytes.clone(),
    };
    write_file(out, &bytes)?;

    Ok(AssetRecord {
        asset_type: "sprite",
        name: spec.to_string(),
        path: out.display().to_string(),
        bytes: bytes.len(),
        content_hash: texture.pixel_hash(),
    })
}

/// Run the sprite command
///
/// # Arguments
/// * `config` - Loaded configuration (viewport for backgrounds)
/// * `kind` - Sprite kind name, e.g. `alan` or `potion_health`
/// * `frame` - Animation frame; only animated kinds use it
/// * `flip` - Mirror horizontally
/// * `out` - Output path ending in `.png` or `.rgba`
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &SynthConfig, kind: &str, frame: u32, flip: bool, out: &Path) -> Result<ExitCode> {
    let kind: SpriteKind = kind.parse()?;
    let spec = SpriteSpec::new(kind, frame);
    let synth = TextureSynthesizer::from_config(config);

    let (width, height) = kind.dimensions(synth.viewport());
    println!(
        "{} {} ({}x{})",
        "Rendering:".cyan().bold(),
        spec.normalized(),
        width,
        height
    );

    let record = render(&synth, &spec, flip, out)?;
    record.print();
    Ok(ExitCode::SUCCESS)
}
