//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use umbra_math::{try_unit, Interval, MathResult, Ray, Vec3};

/// Guards both the parallel test and the minimum hit distance.
const EPSILON: f32 = 1e-4;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: Option<Arc<Material>>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails if the vertices are collinear (the face normal is degenerate).
    pub fn new(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: impl Into<Option<Arc<Material>>>,
    ) -> MathResult<Self> {
        let normal = try_unit((v1 - v0).cross(v2 - v0))?;

        Ok(Self {
            v0,
            v1,
            v2,
            normal,
            material: material.into(),
        })
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        // Line intersection behind or too close to the origin is not a ray hit
        let t = f * edge2.dot(q);
        if t <= EPSILON || !ray_t.surrounds(t) {
            return None;
        }

        let mut rec = HitRecord::new(ray, t, self.normal, self.material.as_deref());
        rec.u = u;
        rec.v = v;
        Some(rec)
    }
}
