//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use umbra_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Option<Arc<Material>>,
}

impl Sphere {
    /// Create a new sphere. Pass `None` for a surface that reflects nothing.
    pub fn new(center: Vec3, radius: f32, material: impl Into<Option<Arc<Material>>>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// Both roots of `|O + tD - C|² = R²` for a unit-direction ray, nearest first.
    ///
    /// Returns `None` when the discriminant is negative.
    pub fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(oc);
        let discriminant = a * a - (oc.length_squared() - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let d1 = -a + sqrtd;
        let d2 = -a - sqrtd;
        Some((d1.min(d2), d1.max(d2)))
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        // Only the nearer root is considered; a ray starting inside the sphere misses it.
        let (root, _) = self.roots(ray)?;
        if !ray_t.surrounds(root) {
            return None;
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(
            ray,
            root,
            outward_normal,
            self.material.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Arc::new(Material::default()))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Material::default()),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.hit(&ray, Interval::FORWARD).expect("should hit");
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!(rec.material.is_some());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);

        assert!(sphere.roots(&ray).is_none());
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_roots_symmetric_about_center() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, 0.5), 1.5, None);
        let origin = Vec3::new(4.0, 2.0, 0.5);
        let direction = (sphere.center() - origin).normalize();
        let ray = Ray::new(origin, direction);

        let (near, far) = sphere.roots(&ray).expect("ray through the center");
        let center_t = (sphere.center() - origin).length();

        assert!(near < far);
        assert!(((center_t - near) - (far - center_t)).abs() < 1e-4);
        assert!((center_t - near - sphere.radius()).abs() < 1e-4);

        let rec = sphere.hit(&ray, Interval::FORWARD).expect("should hit");
        assert_eq!(rec.t, near);
        assert!(rec.material.is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);

        assert!(sphere.roots(&ray).is_some());
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_respects_max() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::new(0.0, 4.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.0, 4.5)).is_some());
    }
}
