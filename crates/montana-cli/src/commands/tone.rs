//! Tone command implementation
//!
//! Renders one UI cue tone to a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use montana_backend_audio::rng::create_sound_rng;
use montana_backend_audio::WaveformSynthesizer;
use montana_spec::{CueTone, SynthConfig};

use super::output::{write_file, AssetRecord};

/// Renders `cue` and writes it to `out`. Noise cues draw from `seed`.
pub fn render(
    synth: &WaveformSynthesizer,
    cue: CueTone,
    seed: u32,
    out: &Path,
) -> Result<AssetRecord> {
    let mut rng = create_sound_rng(seed, cue.as_str());
    let clip = synth
        .render_cue(cue, &mut rng)
        .with_context(|| format!("Failed to encode cue '{cue}'"))?;
    write_file(out, &clip.wav)?;

    Ok(AssetRecord {
        asset_type: "tone",
        name: cue.to_string(),
        path: out.display().to_string(),
        bytes: clip.wav.len(),
        content_hash: clip.pcm_hash,
    })
}

/// Run the tone command
///
/// # Arguments
/// * `config` - Loaded configuration (sample rate and seed)
/// * `cue` - Cue name, e.g. `step` or `scream`
/// * `out` - Output WAV path
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &SynthConfig, cue: &str, out: &Path) -> Result<ExitCode> {
    let cue: CueTone = cue.parse()?;
    let tone = cue.spec();
    println!(
        "{} {} ({:?}, {} Hz, {} s)",
        "Rendering:".cyan().bold(),
        cue,
        tone.waveform,
        tone.frequency,
        tone.duration_seconds
    );

    let synth = WaveformSynthesizer::from_config(config);
    let record = render(&synth, cue, config.seed, out)?;
    record.print();
    Ok(ExitCode::SUCCESS)
}
