//! Run settings: reference pH and the protein length cut-off
//!
//! Defaults can be overridden through `ORFPROFILE_PH` and
//! `ORFPROFILE_MIN_LENGTH`; command-line flags override both.

use log::{debug, warn};

use crate::protein::{DEFAULT_MIN_PROTEIN_LENGTH, REFERENCE_PH};

pub const PH_ENV: &str = "ORFPROFILE_PH";
pub const MIN_LENGTH_ENV: &str = "ORFPROFILE_MIN_LENGTH";

pub const MIN_PH: f64 = 0.0;
pub const MAX_PH: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub ph: f64,
    pub min_protein_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            ph: REFERENCE_PH,
            min_protein_length: DEFAULT_MIN_PROTEIN_LENGTH,
        }
    }
}

pub fn is_valid_ph(ph: f64) -> bool {
    ph.is_finite() && (MIN_PH..=MAX_PH).contains(&ph)
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; bad values fall back to defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PipelineConfig::default();

        if let Some(raw) = lookup(PH_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(ph) if is_valid_ph(ph) => config.ph = ph,
                _ => warn!("Invalid {PH_ENV} '{raw}', using pH {}", config.ph),
            }
        }

        if let Some(raw) = lookup(MIN_LENGTH_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(length) => config.min_protein_length = length,
                Err(_) => warn!(
                    "Invalid {MIN_LENGTH_ENV} '{raw}', using {}",
                    config.min_protein_length
                ),
            }
        }

        debug!("Configuration: {config:?}");
        config
    }

    /// Apply command-line values on top; an out-of-range pH is ignored.
    pub fn with_overrides(mut self, ph: Option<f64>, min_protein_length: Option<usize>) -> Self {
        if let Some(ph) = ph {
            if is_valid_ph(ph) {
                self.ph = ph;
            } else {
                warn!("Ignoring pH {ph}, outside {MIN_PH}..={MAX_PH}");
            }
        }
        if let Some(length) = min_protein_length {
            self.min_protein_length = length;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.ph, 7.0);
        assert_eq!(config.min_protein_length, 50);
    }

    #[test]
    fn test_environment_values() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            (PH_ENV, " 6.5 "),
            (MIN_LENGTH_ENV, "80"),
        ]));
        assert_eq!(config.ph, 6.5);
        assert_eq!(config.min_protein_length, 80);
    }

    #[test]
    fn test_invalid_environment_values_fall_back() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            (PH_ENV, "acidic"),
            (MIN_LENGTH_ENV, "-3"),
        ]));
        assert_eq!(config, PipelineConfig::default());

        let config = PipelineConfig::from_lookup(lookup_from(&[(PH_ENV, "15")]));
        assert_eq!(config.ph, 7.0);
    }

    #[test]
    fn test_overrides() {
        let config = PipelineConfig::default().with_overrides(Some(5.5), Some(10));
        assert_eq!(config.ph, 5.5);
        assert_eq!(config.min_protein_length, 10);

        let config = PipelineConfig::default().with_overrides(Some(f64::NAN), None);
        assert_eq!(config, PipelineConfig::default());
    }
}
