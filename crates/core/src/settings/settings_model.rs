//! Settings domain model.

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_PRECISION_FACTOR;
use crate::errors::{Error, Result};

/// Library-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Fixed seed for the color random source. `None` seeds from entropy.
    pub color_seed: Option<u64>,
    /// Units per percent in fixed-point weights.
    pub weight_precision_factor: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_seed: None,
            weight_precision_factor: WEIGHT_PRECISION_FACTOR,
        }
    }
}

impl Settings {
    /// Parses settings from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weight_precision_factor <= 0 {
            return Err(Error::InvalidConfigValue(format!(
                "weightPrecisionFactor must be positive, got {}",
                self.weight_precision_factor
            )));
        }
        if self.weight_precision_factor.checked_mul(100).is_none() {
            return Err(Error::InvalidConfigValue(format!(
                "weightPrecisionFactor {} overflows the weight range",
                self.weight_precision_factor
            )));
        }
        Ok(())
    }

    /// Weight of a full allocation under the configured precision.
    ///
    /// Saturates at `i32::MAX` for factors that [`Settings::validate`] rejects.
    pub fn one_hundred_percent(&self) -> i32 {
        self.weight_precision_factor.saturating_mul(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_HUNDRED_PERCENT;

    #[test]
    fn test_default_settings_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.color_seed, None);
        assert_eq!(settings.one_hundred_percent(), ONE_HUNDRED_PERCENT);
    }

    #[test]
    fn test_from_json_fills_missing_keys() {
        let settings = Settings::from_json(r#"{"colorSeed": 42}"#).unwrap();
        assert_eq!(settings.color_seed, Some(42));
        assert_eq!(settings.weight_precision_factor, WEIGHT_PRECISION_FACTOR);

        let empty = Settings::from_json("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_from_json_custom_precision() {
        let settings = Settings::from_json(r#"{"weightPrecisionFactor": 1000}"#).unwrap();
        assert_eq!(settings.one_hundred_percent(), 100_000);
    }

    #[test]
    fn test_from_json_rejects_non_positive_precision() {
        let result = Settings::from_json(r#"{"weightPrecisionFactor": 0}"#);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_from_json_rejects_overflowing_precision() {
        let result = Settings::from_json(r#"{"weightPrecisionFactor": 30000000}"#);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));

        let largest = i32::MAX / 100;
        let json = format!(r#"{{"weightPrecisionFactor": {}}}"#, largest);
        let settings = Settings::from_json(&json).unwrap();
        assert_eq!(settings.one_hundred_percent(), largest * 100);

        let json = format!(r#"{{"weightPrecisionFactor": {}}}"#, largest + 1);
        assert!(Settings::from_json(&json).is_err());
    }

    #[test]
    fn test_one_hundred_percent_saturates_for_unvalidated_factor() {
        let settings = Settings {
            color_seed: None,
            weight_precision_factor: 30_000_000,
        };
        assert_eq!(settings.one_hundred_percent(), i32::MAX);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = Settings::from_json("not json");
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
