//! Game settings
//!
//! Read from a JSON file by the native driver. Missing fields take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MAX_PROJECTILES, RESPAWN_MIN_OTHER_DISTANCE,
    RESPAWN_MIN_STAR_DISTANCE,
};
use crate::sim::Field;

/// Errors loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid field size {width}x{height}: {reason}")]
    InvalidField {
        width: f32,
        height: f32,
        reason: &'static str,
    },

    #[error("max_projectiles must be at least 1")]
    NoProjectiles,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Field width in pixels
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,

    // === Session ===
    /// Fixed seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Live projectile cap
    pub max_projectiles: usize,

    // === Headless driver ===
    /// Frames the native driver runs before exiting
    pub demo_frames: u64,
    /// Let the driver fly the ship
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            seed: None,
            max_projectiles: MAX_PROJECTILES,
            demo_frames: 60 * 60,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Reject fields the simulation cannot run on.
    ///
    /// The field must be large enough that a spot clear of both respawn
    /// zones always exists.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = (self.field_width, self.field_height);
        let invalid = |reason| SettingsError::InvalidField {
            width,
            height,
            reason,
        };

        if !width.is_finite() || !height.is_finite() {
            return Err(invalid("dimensions must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid("dimensions must be positive"));
        }
        // Half-diagonal has to clear the star zone, the full diagonal the other ship
        let diagonal = (width * width + height * height).sqrt();
        if diagonal / 2.0 < RESPAWN_MIN_STAR_DISTANCE || diagonal < 2.0 * RESPAWN_MIN_OTHER_DISTANCE {
            return Err(invalid("too small for respawn exclusion zones"));
        }
        if self.max_projectiles == 0 {
            return Err(SettingsError::NoProjectiles);
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.field(), Field::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "field_width": 1024, "seed": 7 }"#).unwrap();
        assert_eq!(settings.field_width, 1024.0);
        assert_eq!(settings.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.max_projectiles, MAX_PROJECTILES);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let err = Settings::from_json(r#"{ "field_width": -5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidField { .. }));

        let err = Settings::from_json(r#"{ "field_width": 100, "field_height": 100 }"#).unwrap_err();
        assert!(err.to_string().contains("respawn"));

        let err = Settings::from_json(r#"{ "max_projectiles": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::NoProjectiles));
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
