//! Scene container, builder and nearest-hit resolver.
//!
//! A [`Scene`] is immutable once built. Intersection is a linear scan over
//! spheres, then planes, then triangles; the [`Hittable`] impl is the seam
//! where an acceleration structure could be slotted in later.

use std::sync::Arc;

use thiserror::Error;
use umbra_math::{Interval, MathError, Ray, Vec3};

use crate::{HitRecord, Hittable, Material, Plane, Sphere, Triangle};

/// Errors that can occur while assembling a scene or its lights.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("reflectivity {0} is outside [0, 1]")]
    InvalidReflectivity(f32),

    #[error("shininess {0} must be finite and non-negative")]
    InvalidShininess(f32),

    #[error("light {index} has non-positive intensity {intensity}")]
    InvalidLightIntensity { index: usize, intensity: f32 },

    #[error("degenerate {kind} {index}: {source}")]
    Degenerate {
        kind: &'static str,
        index: usize,
        #[source]
        source: MathError,
    },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Read-only collection of primitives to render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    triangles: Vec<Triangle>,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.triangles.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nearest hit along the ray at any positive distance.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit(ray, Interval::FORWARD)
    }

    /// Evaluation order of the resolver: spheres, planes, triangles.
    fn primitives(&self) -> impl Iterator<Item = &dyn Hittable> {
        let spheres = self.spheres.iter().map(|s| s as &dyn Hittable);
        let planes = self.planes.iter().map(|p| p as &dyn Hittable);
        let triangles = self.triangles.iter().map(|t| t as &dyn Hittable);
        spheres.chain(planes).chain(triangles)
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;
        let mut closest_so_far = ray_t.max;

        // `surrounds` is exclusive, so an equal-distance hit later in the
        // order never replaces an earlier one.
        for object in self.primitives() {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

/// Collects primitives and validates them into a [`Scene`].
///
/// Geometry errors are deferred to [`SceneBuilder::build`] so calls can be
/// chained.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    spheres: Vec<Sphere>,
    planes: Vec<(Vec3, f32, Option<Arc<Material>>)>,
    triangles: Vec<([Vec3; 3], Option<Arc<Material>>)>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere.
    pub fn sphere(
        mut self,
        center: Vec3,
        radius: f32,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Self {
        self.spheres.push(Sphere::new(center, radius, material));
        self
    }

    /// Add a plane `P · normal = d`.
    pub fn plane(
        mut self,
        normal: Vec3,
        d: f32,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Self {
        self.planes.push((normal, d, material.into()));
        self
    }

    /// Add a triangle.
    pub fn triangle(
        mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Self {
        self.triangles.push(([v0, v1, v2], material.into()));
        self
    }

    /// Add the four faces of the corner tetrahedron spanned by the unit axes,
    /// translated by `offset`. All faces share `material`.
    pub fn tetrahedron(mut self, offset: Vec3, material: impl Into<Option<Arc<Material>>>) -> Self {
        let material = material.into();
        let x = Vec3::X + offset;
        let y = Vec3::Y + offset;
        let z = Vec3::Z + offset;
        let o = offset;

        for face in [[y, o, z], [o, y, x], [z, x, y], [x, z, o]] {
            self.triangles.push((face, material.clone()));
        }
        self
    }

    /// Validate every primitive and material and produce the scene.
    pub fn build(self) -> SceneResult<Scene> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius() > 0.0 && sphere.radius().is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius(),
                });
            }
            validate_material(sphere.material())?;
        }

        let planes = self
            .planes
            .into_iter()
            .enumerate()
            .map(|(index, (normal, d, material))| {
                validate_material(material.as_ref())?;
                Plane::new(normal, d, material).map_err(|source| SceneError::Degenerate {
                    kind: "plane",
                    index,
                    source,
                })
            })
            .collect::<SceneResult<Vec<_>>>()?;

        let triangles = self
            .triangles
            .into_iter()
            .enumerate()
            .map(|(index, ([v0, v1, v2], material))| {
                validate_material(material.as_ref())?;
                Triangle::new(v0, v1, v2, material).map_err(|source| SceneError::Degenerate {
                    kind: "triangle",
                    index,
                    source,
                })
            })
            .collect::<SceneResult<Vec<_>>>()?;

        let scene = Scene {
            spheres: self.spheres,
            planes,
            triangles,
        };

        log::info!(
            "Built scene: {} spheres, {} planes, {} triangles",
            scene.spheres.len(),
            scene.planes.len(),
            scene.triangles.len()
        );

        Ok(scene)
    }
}

fn validate_material(material: Option<&Arc<Material>>) -> SceneResult<()> {
    material.map_or(Ok(()), |m| m.validate())
}
