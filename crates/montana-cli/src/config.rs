//! Configuration loading for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use montana_spec::SynthConfig;
use tracing::debug;

/// Per-invocation overrides from command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces `sample_rate`.
    pub sample_rate: Option<u32>,
    /// Replaces `viewport`.
    pub viewport: Option<[u32; 2]>,
}

/// Loads the configuration file, or the defaults when no path is given, then
/// applies `overrides` and validates the result.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<SynthConfig> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = SynthConfig::from_json(&json)
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            debug!(path = %path.display(), "loaded config");
            config
        }
        None => SynthConfig::default(),
    };

    if let Some(sample_rate) = overrides.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(viewport) = overrides.viewport {
        config.viewport = viewport;
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Parses a `WIDTHxHEIGHT` viewport such as `800x600`.
pub fn parse_viewport(s: &str) -> Result<[u32; 2], String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    Ok([width, height])
}
