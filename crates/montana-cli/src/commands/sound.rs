//! Sound command implementation
//!
//! Renders one sound effect to a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use montana_backend_audio::rng::create_sound_rng;
use montana_backend_audio::WaveformSynthesizer;
use montana_spec::{SoundName, SoundSpec, SynthConfig};

use super::output::{write_file, AssetRecord};

/// Renders `spec` with the generator for `seed` and writes it to `out`.
///
/// Uses the same per-sound seed derivation as the sound bank, so the file
/// matches what the game plays for that seed.
pub fn render(
    synth: &WaveformSynthesizer,
    spec: &SoundSpec,
    seed: u32,
    out: &Path,
) -> Result<AssetRecord> {
    let mut rng = create_sound_rng(seed, spec.name.as_str());
    let clip = synth
        .render(spec, &mut rng)
        .with_context(|| format!("Failed to encode sound '{}'", spec.name))?;
    write_file(out, &clip.wav)?;

    Ok(AssetRecord {
        asset_type: "sound",
        name: spec.name.to_string(),
        path: out.display().to_string(),
        bytes: clip.wav.len(),
        content_hash: clip.pcm_hash,
    })
}

/// Run the sound command
///
/// # Arguments
/// * `config` - Loaded configuration (sample rate and default seed)
/// * `name` - Sound name, e.g. `footstep`
/// * `seed` - Seed override for the ambient sounds
/// * `duration` - Length override in seconds
/// * `out` - Output WAV path
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config: &SynthConfig,
    name: &str,
    seed: Option<u32>,
    duration: Option<f64>,
    out: &Path,
) -> Result<ExitCode> {
    let name: SoundName = name.parse()?;
    let synth = WaveformSynthesizer::from_config(config);
    let mut spec = synth.spec(name);
    if let Some(duration) = duration {
        if !duration.is_finite() || duration <= 0.0 {
            bail!("Duration must be a positive number of seconds, got {duration}");
        }
        spec = spec.with_duration(duration);
    }
    let seed = seed.unwrap_or(config.seed);

    println!(
        "{} {} ({} s at {} Hz, {} samples)",
        "Rendering:".cyan().bold(),
        name,
        spec.duration_seconds,
        spec.sample_rate,
        spec.num_samples()
    );
    if name.is_stochastic() {
        println!("  {} {}", "seed:".dimmed(), seed);
    }

    let record = render(&synth, &spec, seed, out)?;
    record.print();
    Ok(ExitCode::SUCCESS)
}
