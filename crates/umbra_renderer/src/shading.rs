//! Local Phong shading, shadow rays and the mirror bounce loop.

use umbra_math::{clamp01, hadamard, reflect, try_unit, Interval, Ray, Vec3};

use crate::{Color, HitRecord, Hittable, Light, Material, RenderConfig, Scene};

/// Offset along the surface normal for secondary ray origins.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Compute the color seen along a camera ray.
///
/// Runs at most `reflection_count + 1` bounces. Each mirror hit keeps
/// `reflectivity` of its local color and passes the remaining
/// `1 - reflectivity` on to the reflected ray.
pub fn trace(ray: Ray, scene: &Scene, lights: &[Light], config: &RenderConfig) -> Color {
    let mut sample = Color::ZERO;
    let mut mirror_attenuation = 1.0;
    let mut ray = ray;

    for _ in 0..=config.reflection_count {
        let Some(hit) = scene.intersect(&ray) else {
            sample += config.background_color() * mirror_attenuation;
            break;
        };

        // Surfaces without a material reflect nothing.
        let Some(material) = hit.material else {
            break;
        };

        let local = shade(&ray, &hit, material, scene, lights, config) * mirror_attenuation;

        if !(config.use_mirrors && material.mirror) {
            sample += local;
            break;
        }

        sample += local * material.reflectivity;
        mirror_attenuation *= 1.0 - material.reflectivity;
        ray = Ray::new(offset_origin(&hit), reflect(ray.direction(), hit.normal));
    }

    sample
}

/// Local radiance at a hit: Lambert plus Phong highlight, summed over the
/// lights that are not shadowed.
pub fn shade(
    ray: &Ray,
    hit: &HitRecord<'_>,
    material: &Material,
    scene: &Scene,
    lights: &[Light],
    config: &RenderConfig,
) -> Color {
    let view = -ray.direction();
    let mut radiance = Color::ZERO;

    for light in lights {
        let to_light = light.position - hit.p;
        // A light sitting on the surface has no direction.
        let Ok(light_dir) = try_unit(to_light) else {
            continue;
        };
        let distance = to_light.length();

        if config.shadows && !is_lit_by(hit, light_dir, distance, scene) {
            continue;
        }

        let diffuse = if config.calc_diffuse {
            material.color * clamp01(light_dir.dot(hit.normal))
        } else {
            material.color
        };

        // The highlight is always white; materials carry no specular color.
        let specular = if config.calc_phong && material.shininess > 0.0 {
            clamp01(reflect(-light_dir, hit.normal).dot(view)).powf(material.shininess)
        } else {
            0.0
        };

        let mut contribution = hadamard(light.color, diffuse + Color::splat(specular));
        if config.calc_diffuse || config.calc_phong {
            contribution *= light.attenuated_intensity(distance);
        }
        radiance += contribution;
    }

    radiance
}

/// Cast a shadow ray toward a light `distance` away. Any hit strictly
/// closer than the light occludes it.
pub fn is_lit_by(hit: &HitRecord<'_>, light_dir: Vec3, distance: f32, scene: &Scene) -> bool {
    let shadow_ray = Ray::new(offset_origin(hit), light_dir);
    scene
        .hit(&shadow_ray, Interval::new(0.0, distance))
        .is_none()
}

#[inline]
fn offset_origin(hit: &HitRecord<'_>) -> Vec3 {
    hit.p + hit.normal * SHADOW_BIAS
}
