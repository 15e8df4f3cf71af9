//! Configuration for observation validation

use serde::{Deserialize, Serialize};

/// Validation rule switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Duplicate or decreasing dates within a summary series are errors
    /// (warnings when false)
    pub require_increasing_dates: bool,

    /// Series and surveys without observations only warn
    pub allow_empty_series: bool,

    /// Warn about observations with zero error
    pub warn_zero_error: bool,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self {
            require_increasing_dates: true,
            allow_empty_series: true,
            warn_zero_error: true,
        }
    }

    /// Relaxed rules used by the CLI `--lenient-dates` flag
    pub fn lenient_dates(mut self) -> Self {
        self.require_increasing_dates = false;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool configuration (`obsfile.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: ValidationConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert!(config.validation.require_increasing_dates);
        assert!(config.validation.allow_empty_series);
        assert!(config.validation.warn_zero_error);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{"validation": {"warn_zero_error": false}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.validation.warn_zero_error);
        assert!(config.validation.require_increasing_dates);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_lenient_dates() {
        let rules = ValidationConfig::new().lenient_dates();
        assert!(!rules.require_increasing_dates);
        assert!(rules.allow_empty_series);
    }
}
