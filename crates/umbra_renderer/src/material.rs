//! Surface materials for local Phong shading and mirror bounces.

use crate::scene::{SceneError, SceneResult};
use umbra_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface description shared by any number of primitives.
///
/// Materials are immutable once a scene is built; primitives hold them
/// through `Arc<Material>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base (diffuse) color
    pub color: Color,
    /// Spawns a reflected ray when mirrors are enabled
    pub mirror: bool,
    /// Phong exponent; 0 disables the specular highlight
    pub shininess: f32,
    /// Share of the local color kept at a mirror hit, in [0, 1]
    pub reflectivity: f32,
}

impl Material {
    /// Create a matte material with the given color.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            mirror: false,
            shininess: 0.0,
            reflectivity: 0.0,
        }
    }

    /// Create a mirror material.
    ///
    /// - `color`: tint of the locally shaded part
    /// - `reflectivity`: weight of the local color; the reflected ray
    ///   carries the remaining `1 - reflectivity`
    pub fn mirror(color: Color, reflectivity: f32) -> Self {
        Self {
            color,
            mirror: true,
            shininess: 0.0,
            reflectivity,
        }
    }

    /// Set the Phong exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Check the material's parameter ranges.
    pub fn validate(&self) -> SceneResult<()> {
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(SceneError::InvalidReflectivity(self.reflectivity));
        }
        if !(self.shininess >= 0.0 && self.shininess.is_finite()) {
            return Err(SceneError::InvalidShininess(self.shininess));
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}
