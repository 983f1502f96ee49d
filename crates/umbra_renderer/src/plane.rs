//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use umbra_math::{try_unit, Interval, MathResult, Ray, Vec3};

/// Below this `|direction · normal|` a ray counts as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane in point-normal form: `P` lies on it iff `P · normal = d`.
#[derive(Debug, Clone)]
pub struct Plane {
    d: f32,
    normal: Vec3,
    material: Option<Arc<Material>>,
}

impl Plane {
    /// Create a plane from a normal and offset. The normal is normalized;
    /// `d` is interpreted against the unit normal.
    pub fn new(
        normal: Vec3,
        d: f32,
        material: impl Into<Option<Arc<Material>>>,
    ) -> MathResult<Self> {
        Ok(Self {
            d,
            normal: try_unit(normal)?,
            material: material.into(),
        })
    }

    /// Create a plane through `point` with the given normal.
    pub fn through(
        point: Vec3,
        normal: Vec3,
        material: impl Into<Option<Arc<Material>>>,
    ) -> MathResult<Self> {
        let normal = try_unit(normal)?;
        Ok(Self {
            d: point.dot(normal),
            normal,
            material: material.into(),
        })
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }
}

impl Hittable for Plane {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let denominator = ray.direction().dot(self.normal);
        if denominator.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.normal * self.d - ray.origin()).dot(self.normal) / denominator;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord::new(ray, t, self.normal, self.material.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::Y, -1.0, Arc::new(Material::default())).unwrap()
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y);

        let rec = plane.hit(&ray, Interval::FORWARD).expect("should hit");
        assert!((rec.t - 4.0).abs() < 1e-6);
        assert!((rec.p.y + 1.0).abs() < 1e-6);
        assert_eq!(rec.normal, Vec3::Y);
        assert!(rec.front_face);
    }

    #[test]
    fn test_plane_hit_from_below() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);

        let rec = plane.hit(&ray, Interval::FORWARD).expect("should hit");
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_parallel_never_hits() {
        let plane = floor();
        let directions = [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0).normalize()];
        let origins = [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(3.0, -7.0, 2.0),
        ];

        for origin in origins {
            for direction in directions {
                let ray = Ray::new(origin, direction);
                assert!(plane.hit(&ray, Interval::FORWARD).is_none());
            }
        }
    }

    #[test]
    fn test_plane_behind_origin() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::Y);
        assert!(plane.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_plane_through_point() {
        let point = Vec3::new(0.0, 0.0, 2.0);
        let plane = Plane::through(point, Vec3::new(0.0, 0.0, 3.0), None).unwrap();
        assert_eq!(plane.normal(), Vec3::Z);
        assert_eq!(plane.d(), 2.0);
    }

    #[test]
    fn test_degenerate_normal() {
        assert!(Plane::new(Vec3::ZERO, 1.0, None).is_err());
    }
}
