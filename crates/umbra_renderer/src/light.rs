//! Point lights with inverse-square falloff.

use umbra_math::Vec3;

use crate::scene::{SceneError, SceneResult};
use crate::Color;

/// An omnidirectional point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Radiant intensity at unit distance; must be positive
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// A white light.
    pub fn white(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Color::ONE, intensity)
    }

    /// Intensity reaching a point `distance` away.
    #[inline]
    pub fn attenuated_intensity(&self, distance: f32) -> f32 {
        self.intensity / (distance * distance)
    }
}

/// Check that every light has a positive, finite intensity.
pub fn validate_lights(lights: &[Light]) -> SceneResult<()> {
    for (index, light) in lights.iter().enumerate() {
        if !(light.intensity > 0.0 && light.intensity.is_finite()) {
            return Err(SceneError::InvalidLightIntensity {
                index,
                intensity: light.intensity,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_square() {
        let light = Light::white(Vec3::ZERO, 8.0);
        assert_eq!(light.attenuated_intensity(1.0), 8.0);
        assert_eq!(light.attenuated_intensity(2.0), 2.0);
        assert_eq!(light.attenuated_intensity(4.0), 0.5);
    }

    #[test]
    fn test_validate_lights() {
        let good = [Light::white(Vec3::Y, 1.0), Light::white(Vec3::X, 0.2)];
        assert!(validate_lights(&good).is_ok());
        assert!(validate_lights(&[]).is_ok());

        let bad = [Light::white(Vec3::Y, 1.0), Light::white(Vec3::X, 0.0)];
        assert_eq!(
            validate_lights(&bad),
            Err(SceneError::InvalidLightIntensity {
                index: 1,
                intensity: 0.0
            })
        );
    }
}
