//! Vector helpers on top of glam.
//!
//! glam already provides add/sub/scale, `dot`, `cross`, `length` and the
//! componentwise product. This module adds the operations the renderer
//! needs with an explicit policy for degenerate input.

use crate::{Interval, MathError, MathResult, Vec3};

/// Squared lengths below this are treated as zero when normalizing.
const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Componentwise (Hadamard) product.
#[inline]
pub fn hadamard(a: Vec3, b: Vec3) -> Vec3 {
    a * b
}

/// Normalize `v`, failing with [`MathError::DegenerateVector`] instead of
/// producing NaN or infinity when `v` has (near) zero or non-finite length.
#[inline]
pub fn try_unit(v: Vec3) -> MathResult<Vec3> {
    let len_sq = v.length_squared();
    if !len_sq.is_finite() || len_sq < DEGENERATE_LENGTH_SQUARED {
        return Err(MathError::DegenerateVector {
            x: v.x,
            y: v.y,
            z: v.z,
        });
    }
    Ok(v / len_sq.sqrt())
}

/// Reflect a vector about a normal: `d - 2(d·n)n`.
///
/// For unit `d` and `n` the result is unit length.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    Interval::UNIT.clamp(x)
}
