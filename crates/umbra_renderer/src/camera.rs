//! Pinhole camera for ray generation.

use umbra_math::{try_unit, MathError, MathResult, Ray, Vec2, Vec3};

/// Pinhole camera projecting through a rectangular image plane.
///
/// Normalized device coordinates `(x, y) ∈ [-1, 1]²` map to
/// `plane_center + x * right + y * up`, with `y = 1` at the top row.
/// The eye is never on the image plane, so camera rays always have a
/// well-defined direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    plane_center: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera from an eye point and an image plane given by its
    /// center and half-extent vectors.
    pub fn new(eye: Vec3, plane_center: Vec3, right: Vec3, up: Vec3) -> MathResult<Self> {
        let plane_normal = try_unit(right.cross(up))?;
        let forward = plane_center - eye;
        if forward.dot(plane_normal).abs() < 1e-6 {
            return Err(MathError::DegenerateVector {
                x: forward.x,
                y: forward.y,
                z: forward.z,
            });
        }

        Ok(Self {
            eye,
            plane_center,
            right,
            up,
        })
    }

    /// Create a camera at `eye` looking toward `target`, with the image plane
    /// one unit in front of the eye.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        vup: Vec3,
        half_width: f32,
        half_height: f32,
    ) -> MathResult<Self> {
        let w = try_unit(target - eye)?;
        let u = try_unit(w.cross(vup))?;
        let v = u.cross(w);

        Self::new(eye, eye + w, u * half_width, v * half_height)
    }

    /// Point on the image plane for normalized device coordinates.
    #[inline]
    pub fn plane_point(&self, ndc: Vec2) -> Vec3 {
        self.plane_center + self.right * ndc.x + self.up * ndc.y
    }

    /// Generate the unit-direction ray through `ndc`.
    #[inline]
    pub fn get_ray(&self, ndc: Vec2) -> Ray {
        Ray::new(self.eye, (self.plane_point(ndc) - self.eye).normalize())
    }
}

impl Default for Camera {
    /// Eye at `(0, 0, 6)` looking down `-Z` through the plane `z = 5`.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 6.0),
            plane_center: Vec3::new(0.0, 0.0, 5.0),
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}
