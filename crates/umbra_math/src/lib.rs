// Re-export glam for convenience
pub use glam::*;

// Umbra math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{clamp01, hadamard, reflect, try_unit};

use thiserror::Error;

/// Errors raised by vector operations that have no meaningful result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector { x: f32, y: f32, z: f32 },
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_vec2_operations() {
        let p = Vec2::new(0.5, -0.5) + Vec2::splat(0.25);
        assert_eq!(p, Vec2::new(0.75, -0.25));
    }

    #[test]
    fn test_error_display() {
        let err = MathError::DegenerateVector {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        let message = "cannot normalize degenerate vector (0, 0, 0)";
        assert_eq!(err.to_string(), message);
    }
}
