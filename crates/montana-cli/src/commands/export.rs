//! Export command implementation
//!
//! Renders the whole asset vocabulary into a directory and reports a BLAKE3
//! hash per asset, so two exports can be diffed for determinism.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use montana_backend_audio::WaveformSynthesizer;
use montana_backend_texture::TextureSynthesizer;
use montana_spec::{CueTone, SoundName, SpriteKind, SpriteSpec, SynthConfig};
use serde::Serialize;
use tracing::info;

use super::output::AssetRecord;
use super::{sound, sprite, tone};

/// Everything written by one export.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    /// Seed used for the stochastic sounds.
    pub seed: u32,
    /// Sample rate of every sound.
    pub sample_rate: u32,
    /// Viewport used for backgrounds.
    pub viewport: [u32; 2],
    /// Written assets in generation order.
    pub assets: Vec<AssetRecord>,
}

/// File name for a sprite: animated kinds carry their pose index.
fn sprite_file(spec: &SpriteSpec) -> String {
    if spec.kind.is_animated() {
        format!("{}_{}.png", spec.kind, spec.frame)
    } else {
        format!("{}.png", spec.kind)
    }
}

/// Every sprite request an export renders: all poses of animated kinds.
pub fn sprite_requests() -> Vec<SpriteSpec> {
    SpriteKind::ALL
        .into_iter()
        .flat_map(|kind| {
            let frames = if kind.is_animated() { 0..3 } else { 0..1 };
            frames.map(move |frame| SpriteSpec::new(kind, frame))
        })
        .collect()
}

/// Renders every asset under `out_dir`.
pub fn export(config: &SynthConfig, out_dir: &Path) -> Result<ExportReport> {
    let textures = TextureSynthesizer::from_config(config);
    let audio = WaveformSynthesizer::from_config(config);
    let mut assets = Vec::new();

    let sprite_dir = out_dir.join("sprites");
    for spec in sprite_requests() {
        let path = sprite_dir.join(sprite_file(&spec));
        assets.push(sprite::render(&textures, &spec, false, &path)?);
    }

    let sound_dir = out_dir.join("sounds");
    for name in SoundName::ALL {
        let path = sound_dir.join(format!("{name}.wav"));
        assets.push(sound::render(&audio, &audio.spec(name), config.seed, &path)?);
    }

    let tone_dir = out_dir.join("tones");
    for cue in CueTone::ALL {
        let path = tone_dir.join(format!("{cue}.wav"));
        assets.push(tone::render(&audio, cue, config.seed, &path)?);
    }

    info!(count = assets.len(), dir = %out_dir.display(), "export finished");
    Ok(ExportReport {
        seed: config.seed,
        sample_rate: config.sample_rate,
        viewport: config.viewport,
        assets,
    })
}

/// Run the export command
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `out_dir` - Directory to write into (created if missing)
/// * `seed` - Seed override for stochastic sounds
/// * `json` - Print the report as JSON instead of text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &SynthConfig, out_dir: &Path, seed: Option<u32>, json: bool) -> Result<ExitCode> {
    let mut config = config.clone();
    if let Some(seed) = seed {
        config.seed = seed;
    }

    if !json {
        println!(
            "{} {}",
            "Exporting to:".cyan().bold(),
            out_dir.display()
        );
    }

    let report = export(&config, out_dir)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        for asset in &report.assets {
            println!(
                "  {:<6} {:<18} {}",
                asset.asset_type,
                asset.name,
                asset.content_hash.dimmed()
            );
        }
        println!(
            "{} {} assets written",
            "SUCCESS".green().bold(),
            report.assets.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Paths of every file an export of `out_dir` writes.
pub fn expected_files(out_dir: &Path) -> Vec<PathBuf> {
    let sprites = sprite_requests()
        .into_iter()
        .map(|spec| out_dir.join("sprites").join(sprite_file(&spec)));
    let sounds = SoundName::ALL
        .into_iter()
        .map(|name| out_dir.join("sounds").join(format!("{name}.wav")));
    let tones = CueTone::ALL
        .into_iter()
        .map(|cue| out_dir.join("tones").join(format!("{cue}.wav")));
    sprites.chain(sounds).chain(tones).collect()
}
