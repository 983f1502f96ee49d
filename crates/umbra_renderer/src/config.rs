//! Render configuration and its validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tile::DEFAULT_TILE_SIZE;
use crate::Color;

/// Largest accepted super-sampling rate (256 × 256 rays per pixel).
pub const MAX_SUPER_SAMPLING_RATE: u32 = 8;

/// Errors detected before any ray is cast.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("super-sampling rate {rate} exceeds maximum {max}")]
    SuperSamplingRateTooHigh { rate: u32, max: u32 },

    #[error("tile size must be non-zero")]
    ZeroTileSize,

    #[error("background color {0:?} must be finite and non-negative")]
    InvalidBackground([f32; 3]),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Rays per pixel axis is `2^super_sampling_rate`
    pub super_sampling_rate: u32,
    /// Maximum number of mirror bounces after the primary hit
    pub reflection_count: u32,
    /// Follow reflected rays off mirror materials
    pub use_mirrors: bool,
    /// Scale material color by the Lambert term
    pub calc_diffuse: bool,
    /// Add the Phong specular highlight
    pub calc_phong: bool,
    /// Trace shadow rays toward each light
    pub shadows: bool,
    /// Linear color returned by rays that miss everything
    pub background: [f32; 3],
    /// Edge length of the square render tiles
    pub tile_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            super_sampling_rate: 2,
            reflection_count: 1,
            use_mirrors: true,
            calc_diffuse: true,
            calc_phong: true,
            shadows: true,
            background: [0.0; 3],
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, super_sampling_rate: u32, reflection_count: u32) -> Self {
        self.super_sampling_rate = super_sampling_rate;
        self.reflection_count = reflection_count;
        self
    }

    /// Set the shading toggles.
    pub fn with_shading(
        mut self,
        use_mirrors: bool,
        calc_diffuse: bool,
        calc_phong: bool,
        shadows: bool,
    ) -> Self {
        self.use_mirrors = use_mirrors;
        self.calc_diffuse = calc_diffuse;
        self.calc_phong = calc_phong;
        self.shadows = shadows;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color.to_array();
        self
    }

    /// Background as a color vector.
    pub fn background_color(&self) -> Color {
        Color::from_array(self.background)
    }

    /// Rays per pixel axis.
    pub fn rays_per_axis(&self) -> u32 {
        1 << self.super_sampling_rate
    }

    /// Rays per pixel (`4^super_sampling_rate`).
    pub fn rays_per_pixel(&self) -> u32 {
        self.rays_per_axis() * self.rays_per_axis()
    }

    /// Check the configuration before rendering.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.super_sampling_rate > MAX_SUPER_SAMPLING_RATE {
            return Err(ConfigError::SuperSamplingRateTooHigh {
                rate: self.super_sampling_rate,
                max: MAX_SUPER_SAMPLING_RATE,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.background.iter().any(|c| !(c.is_finite() && *c >= 0.0)) {
            return Err(ConfigError::InvalidBackground(self.background));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rays_per_axis(), 4);
        assert_eq!(config.rays_per_pixel(), 16);
    }

    #[test]
    fn test_rays_per_pixel() {
        let config = RenderConfig::default().with_quality(0, 0);
        assert_eq!(config.rays_per_pixel(), 1);

        let config = RenderConfig::default().with_quality(3, 0);
        assert_eq!(config.rays_per_axis(), 8);
        assert_eq!(config.rays_per_pixel(), 64);
    }

    #[test]
    fn test_validate_rejects() {
        let config = RenderConfig::default().with_resolution(0, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDimensions { width: 0, height: 10 })
        ));

        let config = RenderConfig::default().with_quality(MAX_SUPER_SAMPLING_RATE + 1, 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SuperSamplingRateTooHigh { .. })
        ));

        let config = RenderConfig {
            tile_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTileSize)));

        let config = RenderConfig::default().with_background(Color::new(0.0, -1.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBackground(_))
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = RenderConfig::from_json_str(
            r#"{ "width": 64, "height": 32, "shadows": false, "background": [0.1, 0.2, 0.3] }"#,
        )
        .unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert!(!config.shadows);
        assert!(config.use_mirrors);
        assert_eq!(config.super_sampling_rate, 2);
        assert_eq!(config.background_color(), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_from_json_rejects_negative() {
        let result = RenderConfig::from_json_str(r#"{ "width": -4 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));

        let result = RenderConfig::from_json_str(r#"{ "super_sampling_rate": -1 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_validates() {
        let result = RenderConfig::from_json_str(r#"{ "height": 0 }"#);
        assert!(matches!(result, Err(ConfigError::ZeroDimensions { .. })));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = RenderConfig::from_json_file("/nonexistent/umbra/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RenderConfig::default().with_resolution(8, 8);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_json_str(&json).unwrap(), config);
    }
}
