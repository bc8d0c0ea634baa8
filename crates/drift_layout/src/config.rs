//! Surface configuration files
//!
//! ```toml
//! [appearance]
//! background_color = [1.0, 1.0, 1.0, 1.0]
//! corner_radius = 12.0
//! shadow_opacity = 0.25
//!
//! [grabber]
//! width = 40.0
//!
//! [transition]
//! damping_ratio = 1.0
//! frequency_response = 0.3
//! ```
//!
//! Every table and field is optional.

use std::fs;
use std::path::Path;

use drift_animation::{convert, SpringParameters};
use drift_core::Vec2;
use serde::{Deserialize, Serialize};

use crate::appearance::SurfaceAppearance;
use crate::error::ConfigError;
use crate::grabber::GrabberStyle;

/// Top-level surface configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub appearance: SurfaceAppearance,
    pub grabber: GrabberStyle,
    pub transition: TransitionConfig,
}

/// Designer-facing spring parameters for panel transitions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub damping_ratio: f32,
    /// Seconds
    pub frequency_response: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            frequency_response: 0.3,
        }
    }
}

impl TransitionConfig {
    /// Physical spring parameters for a transition starting at
    /// `initial_velocity`. Only call on a validated config.
    pub fn spring_parameters(&self, initial_velocity: Vec2) -> SpringParameters {
        convert(self.damping_ratio, self.frequency_response, initial_velocity)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frequency_response.is_nan() || self.frequency_response <= 0.0 {
            return Err(ConfigError::InvalidFrequencyResponse(
                self.frequency_response,
            ));
        }
        if self.damping_ratio.is_nan() || self.damping_ratio < 0.0 {
            return Err(ConfigError::InvalidDampingRatio(self.damping_ratio));
        }
        Ok(())
    }
}

impl SurfaceConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SurfaceConfig = toml::from_str(source)?;
        config.transition.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading surface config");
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SurfaceConfig::from_toml_str("").unwrap();
        assert_eq!(config, SurfaceConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = SurfaceConfig::from_toml_str(
            r#"
            [appearance]
            corner_radius = 12.0
            border_color = [0.0, 0.0, 0.0, 0.5]
            shadow_offset = [0.0, 2.0]

            [grabber]
            hidden = true
            "#,
        )
        .unwrap();

        let expected = SurfaceAppearance {
            corner_radius: 12.0,
            border_color: Some(Color::rgba(0.0, 0.0, 0.0, 0.5)),
            shadow_offset: Vec2::new(0.0, 2.0),
            ..Default::default()
        };
        assert_eq!(config.appearance, expected);
        assert!(config.grabber.hidden);
        assert_eq!(config.grabber.width, 36.0);
        assert_eq!(config.transition, TransitionConfig::default());
    }

    #[test]
    fn test_transition_parameters() {
        let config = SurfaceConfig::from_toml_str(
            r#"
            [transition]
            damping_ratio = 0.8
            frequency_response = 0.5
            "#,
        )
        .unwrap();

        let params = config.transition.spring_parameters(Vec2::ZERO);
        assert_eq!(params, convert(0.8, 0.5, Vec2::ZERO));
    }

    #[test]
    fn test_rejects_non_positive_frequency_response() {
        let err = SurfaceConfig::from_toml_str("[transition]\nfrequency_response = 0.0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFrequencyResponse(r) if r == 0.0));
    }

    #[test]
    fn test_rejects_negative_damping_ratio() {
        let err = SurfaceConfig::from_toml_str("[transition]\ndamping_ratio = -1.0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDampingRatio(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SurfaceConfig::from_toml_str("[appearance]\ncorner_radius = \"big\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SurfaceConfig::load("/nonexistent/drift/surface.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
