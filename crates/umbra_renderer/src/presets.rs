//! Built-in scenes.

use std::sync::Arc;

use umbra_math::Vec3;

use crate::scene::SceneResult;
use crate::{Color, Light, Material, Scene};

/// Three spheres and a tetrahedron standing over a mirror floor, lit by
/// four white point lights. Viewed well by [`Camera::default`](crate::Camera).
pub fn showcase() -> SceneResult<(Scene, Vec<Light>)> {
    let teal = Arc::new(Material::diffuse(Color::new(0.0, 0.2, 0.21)));
    let coral = Arc::new(Material::diffuse(Color::new(0.98, 0.44, 0.33)));
    let amber = Arc::new(Material::diffuse(Color::new(1.0, 0.63, 0.3)).with_shininess(40.0));
    let floor = Arc::new(Material::mirror(Color::ONE, 0.4).with_shininess(100.0));

    let scene = Scene::builder()
        .sphere(Vec3::new(0.3, 2.0, 1.4), 1.0, teal.clone())
        .sphere(Vec3::new(-3.0, 1.0, 0.0), 1.0, coral)
        .sphere(Vec3::new(3.0, 1.0, 0.4), 1.0, amber)
        .plane(Vec3::Y, -1.0, floor)
        .tetrahedron(Vec3::new(-2.2, 2.2, 0.5), teal)
        .build()?;

    let lights = vec![
        Light::white(Vec3::new(3.0, 3.0, 1.0), 0.3),
        Light::white(Vec3::new(3.0, 5.0, 0.0), 1.0),
        Light::white(Vec3::new(-3.0, 0.1, 3.0), 0.2),
        Light::white(Vec3::new(0.0, 0.0, 6.0), 3.0),
    ];

    log::debug!(
        "Showcase scene: {} primitives, {} lights",
        scene.len(),
        lights.len()
    );

    Ok((scene, lights))
}
