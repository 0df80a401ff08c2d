//! Synthesis configuration.
//!
//! The configuration is a small JSON document. Every field is optional and
//! falls back to its default:
//!
//! ```json
//! { "sample_rate": 44100, "viewport": [800, 600], "seed": 0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::sound::DEFAULT_SAMPLE_RATE;

/// Viewport size used for background rasters when none is configured.
pub const DEFAULT_VIEWPORT: [u32; 2] = [800, 600];

/// Parameters shared by the texture and audio backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Sample rate for every synthesized sound, in Hz.
    pub sample_rate: u32,
    /// Background raster size as `[width, height]`.
    pub viewport: [u32; 2],
    /// Base seed for stochastic sounds.
    pub seed: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            viewport: DEFAULT_VIEWPORT,
            seed: 0,
        }
    }
}

impl SynthConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let config: SynthConfig =
            serde_json::from_str(json).map_err(|e| SpecError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // Plain struct of integers; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Checks that every field is usable by the backends.
    pub fn validate(&self) -> SpecResult<()> {
        if self.sample_rate == 0 {
            return Err(SpecError::invalid_config(
                "sample_rate",
                "must be greater than zero",
            ));
        }
        if self.viewport[0] == 0 || self.viewport[1] == 0 {
            return Err(SpecError::invalid_config(
                "viewport",
                format!(
                    "dimensions must be non-zero, got {}x{}",
                    self.viewport[0], self.viewport[1]
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.viewport, [800, 600]);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SynthConfig::from_json(r#"{ "viewport": [360, 640] }"#).unwrap();
        assert_eq!(
            config,
            SynthConfig {
                viewport: [360, 640],
                ..SynthConfig::default()
            }
        );
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let err = SynthConfig::from_json(r#"{ "sample_rate": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SpecError::InvalidConfig {
                field: "sample_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_viewport_rejected() {
        let err = SynthConfig::from_json(r#"{ "viewport": [0, 600] }"#).unwrap_err();
        assert!(matches!(err, SpecError::InvalidConfig { field: "viewport", .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SynthConfig::from_json(r#"{ "volume": 3 }"#).unwrap_err();
        assert!(matches!(err, SpecError::ConfigParse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SynthConfig {
            sample_rate: 22050,
            viewport: [360, 640],
            seed: 7,
        };
        let parsed = SynthConfig::from_json(&config.to_json_pretty()).unwrap();
        assert_eq!(parsed, config);
    }
}
