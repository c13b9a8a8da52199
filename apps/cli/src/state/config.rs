//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--split-max`, ...)
//! 2. Environment variables (`TIPSPLIT_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization.

use serde::{Deserialize, Serialize};
use tipsplit_core::money::DEFAULT_CURRENCY_SYMBOL;
use tipsplit_core::{SplitRange, DEFAULT_SLIDER_INTERVALS, DEFAULT_SPLIT_MAX};

pub const ENV_SPLIT_MAX: &str = "TIPSPLIT_SPLIT_MAX";
pub const ENV_SLIDER_INTERVALS: &str = "TIPSPLIT_SLIDER_INTERVALS";
pub const ENV_CURRENCY_SYMBOL: &str = "TIPSPLIT_CURRENCY_SYMBOL";

/// Largest slider quantization accepted; beyond this the control is
/// effectively continuous anyway.
const MAX_SLIDER_INTERVALS: u32 = 100;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Upper bound of the split count control (lower bound is always 1)
    pub split_max: u32,

    /// Number of intervals the tip slider snaps to; 0 = continuous
    pub slider_intervals: u32,

    /// Prefix for displayed amounts
    pub currency_symbol: String,
}

impl Default for AppConfig {
    /// Reference behavior: split 1..=100, slider stops every 1/6, dollars.
    fn default() -> Self {
        AppConfig {
            split_max: DEFAULT_SPLIT_MAX,
            slider_intervals: DEFAULT_SLIDER_INTERVALS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `TIPSPLIT_SPLIT_MAX`: split count upper bound (e.g., "20")
    /// - `TIPSPLIT_SLIDER_INTERVALS`: slider stops (e.g., "10", "0")
    /// - `TIPSPLIT_CURRENCY_SYMBOL`: display prefix (e.g., "€")
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup(ENV_SPLIT_MAX) {
            config.split_max = parse_u32(ENV_SPLIT_MAX, &raw)?;
        }

        if let Some(raw) = lookup(ENV_SLIDER_INTERVALS) {
            config.slider_intervals = parse_u32(ENV_SLIDER_INTERVALS, &raw)?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        config.validate()?;
        Ok(config)
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        split_max: Option<u32>,
        slider_intervals: Option<u32>,
        currency_symbol: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(max) = split_max {
            self.split_max = max;
        }
        if let Some(intervals) = slider_intervals {
            self.slider_intervals = intervals;
        }
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        self.validate()?;
        Ok(self)
    }

    /// Split range implied by `split_max`.
    pub fn split_range(&self) -> Result<SplitRange, ConfigError> {
        SplitRange::up_to(self.split_max)
            .map_err(|_| ConfigError::InvalidValue(ENV_SPLIT_MAX.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.split_range()?;

        if self.slider_intervals > MAX_SLIDER_INTERVALS {
            return Err(ConfigError::InvalidValue(ENV_SLIDER_INTERVALS.to_string()));
        }

        Ok(())
    }
}

fn parse_u32(key: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.split_max, 100);
        assert_eq!(config.slider_intervals, 6);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_SPLIT_MAX, "12"),
            (ENV_SLIDER_INTERVALS, " 10 "),
            (ENV_CURRENCY_SYMBOL, "€"),
        ]))
        .unwrap();
        assert_eq!(config.split_max, 12);
        assert_eq!(config.slider_intervals, 10);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.split_range().unwrap().max(), 12);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_SPLIT_MAX, "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TIPSPLIT_SPLIT_MAX");

        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_SPLIT_MAX, "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_SLIDER_INTERVALS, "500")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(Some(8), None, Some("£".to_string()))
            .unwrap();
        assert_eq!(config.split_max, 8);
        assert_eq!(config.slider_intervals, 6);
        assert_eq!(config.currency_symbol, "£");

        assert!(AppConfig::default()
            .with_overrides(Some(0), None, None)
            .is_err());
    }
}
