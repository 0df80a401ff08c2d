//! List command implementation
//!
//! Prints every sprite, sound and cue the engine can produce.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use montana_spec::{CueTone, SoundName, SpriteCategory, SpriteKind, SynthConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SpriteEntry {
    name: &'static str,
    category: &'static str,
    width: u32,
    height: u32,
    frames: u32,
}

#[derive(Debug, Serialize)]
struct SoundEntry {
    name: &'static str,
    duration_seconds: f64,
    stochastic: bool,
}

#[derive(Debug, Serialize)]
struct CueEntry {
    name: &'static str,
    frequency: f64,
    duration_seconds: f64,
    waveform: String,
}

#[derive(Debug, Serialize)]
struct Catalog {
    sprites: Vec<SpriteEntry>,
    sounds: Vec<SoundEntry>,
    cues: Vec<CueEntry>,
}

fn catalog(config: &SynthConfig, category: Option<SpriteCategory>) -> Catalog {
    let sprites = SpriteKind::ALL
        .into_iter()
        .filter(|kind| category.map_or(true, |c| kind.category() == c))
        .map(|kind| {
            let (width, height) = kind.dimensions(config.viewport);
            SpriteEntry {
                name: kind.as_str(),
                category: kind.category().as_str(),
                width,
                height,
                frames: if kind.is_animated() { 3 } else { 1 },
            }
        })
        .collect();
    let sounds = SoundName::ALL
        .into_iter()
        .map(|name| SoundEntry {
            name: name.as_str(),
            duration_seconds: name.default_duration(),
            stochastic: name.is_stochastic(),
        })
        .collect();
    let cues = CueTone::ALL
        .into_iter()
        .map(|cue| {
            let tone = cue.spec();
            CueEntry {
                name: cue.as_str(),
                frequency: tone.frequency,
                duration_seconds: tone.duration_seconds,
                waveform: format!("{:?}", tone.waveform).to_lowercase(),
            }
        })
        .collect();

    Catalog {
        sprites,
        sounds,
        cues,
    }
}

/// Run the list command
///
/// # Arguments
/// * `config` - Loaded configuration (viewport for background sizes)
/// * `category` - Only list sprites in this category, e.g. `enemy`
/// * `json` - Print machine-readable JSON instead of text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &SynthConfig, category: Option<&str>, json: bool) -> Result<ExitCode> {
    let category = category.map(str::parse::<SpriteCategory>).transpose()?;
    let catalog = catalog(config, category);
    if json {
        let out = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
        println!("{out}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Sprites:".cyan().bold());
    for s in &catalog.sprites {
        let frames = if s.frames > 1 {
            format!(", {} frames", s.frames)
        } else {
            String::new()
        };
        println!(
            "  {:<18} {:<10} {}x{}{}",
            s.name, s.category, s.width, s.height, frames
        );
    }

    println!("{}", "Sounds:".cyan().bold());
    for s in &catalog.sounds {
        let seeded = if s.stochastic { " (seeded)" } else { "" };
        println!("  {:<18} {} s{}", s.name, s.duration_seconds, seeded);
    }

    println!("{}", "Cues:".cyan().bold());
    for c in &catalog.cues {
        println!(
            "  {:<18} {} {} Hz, {} s",
            c.name, c.waveform, c.frequency, c.duration_seconds
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_vocabulary() {
        let catalog = catalog(&SynthConfig::default(), None);
        assert_eq!(catalog.sprites.len(), SpriteKind::ALL.len());
        assert_eq!(catalog.sounds.len(), 4);
        assert_eq!(catalog.cues.len(), 5);

        let alan = catalog.sprites.iter().find(|s| s.name == "alan").unwrap();
        assert_eq!((alan.width, alan.height, alan.frames), (32, 64, 3));
        assert_eq!(alan.category, "character");
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(catalog(&SynthConfig::default(), None)).unwrap();
        assert_eq!(json["sounds"][2]["name"], "footstep");
        assert_eq!(json["cues"][2]["waveform"], "noise");
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog(&SynthConfig::default(), Some(SpriteCategory::Enemy));
        assert!(!catalog.sprites.is_empty());
        assert!(catalog.sprites.iter().all(|s| s.category == "enemy"));
        assert!(catalog.sprites.iter().any(|s| s.name == "wolf"));
        assert_eq!(catalog.sounds.len(), 4);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = run(&SynthConfig::default(), Some("boss"), true).unwrap_err();
        assert!(err.to_string().contains("boss"));
    }
}
