//! # Calculation Settings
//!
//! Knobs shared by both calculators. Every field has a default, so a
//! settings file only needs the values it changes.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "sample_count": 200,
//!   "acceleration_model": { "type": "LinearPower", "mm_s2_per_watt": 12.5 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::actuator::AccelerationModel;
use crate::errors::{CalcError, CalcResult};
use crate::sampling::DEFAULT_SAMPLE_COUNT;

/// Settings applied to every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Points per sampled curve (at least 2, so both endpoints are present)
    pub sample_count: usize,

    /// How motor power maps to acceleration
    pub acceleration_model: AccelerationModel,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            acceleration_model: AccelerationModel::default(),
        }
    }
}

impl CalcSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;

        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), sample_count = settings.sample_count, "settings loaded");
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_count < 2 {
            return Err(CalcError::domain(
                "sample_count",
                self.sample_count.to_string(),
                "At least two samples are needed to span the domain",
            ));
        }
        self.acceleration_model.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("mechcalc_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.sample_count, 500);
        assert_eq!(settings.acceleration_model.acceleration_mm_s2(50.0), 500.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = CalcSettings::from_json(r#"{ "sample_count": 64 }"#).unwrap();
        assert_eq!(settings.sample_count, 64);
        assert_eq!(settings.acceleration_model, AccelerationModel::default());

        let empty = CalcSettings::from_json("{}").unwrap();
        assert_eq!(empty, CalcSettings::default());
    }

    #[test]
    fn test_custom_acceleration_model() {
        let json = r#"{ "acceleration_model": { "type": "LinearPower", "mm_s2_per_watt": 12.5 } }"#;
        let settings = CalcSettings::from_json(json).unwrap();
        assert_eq!(settings.acceleration_model.acceleration_mm_s2(2.0), 25.0);
    }

    #[test]
    fn test_rejects_single_sample() {
        let err = CalcSettings::from_json(r#"{ "sample_count": 1 }"#).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CalcSettings::from_json("{ sample_count: }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_settings_path("load");
        fs::write(&path, r#"{ "sample_count": 3 }"#).unwrap();

        let settings = CalcSettings::load(&path).unwrap();
        assert_eq!(settings.sample_count, 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_settings_path("missing");
        let err = CalcSettings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
