//! Umbra - CPU Whitted-style ray tracer
//!
//! Renders spheres, planes and triangles with Phong shading, hard shadows
//! from point lights and mirror reflections. Pixels are supersampled on a
//! regular grid and written out as plain PPM.

mod camera;
mod color;
mod config;
mod hittable;
mod light;
mod material;
mod plane;
mod ppm;
pub mod presets;
mod renderer;
mod sampler;
mod scene;
mod shading;
mod sphere;
mod tile;
mod triangle;

pub use camera::Camera;
pub use color::{color_to_u32, linear_to_display, linear_to_srgb, unpack_rgb};
pub use config::{ConfigError, ConfigResult, RenderConfig, MAX_SUPER_SAMPLING_RATE};
pub use hittable::{HitRecord, Hittable};
pub use light::{validate_lights, Light};
pub use material::{Color, Material};
pub use plane::Plane;
pub use ppm::{save_ppm, write_ppm};
pub use renderer::{
    render, render_with_cancel, CancelToken, PixelBuffer, RenderError, RenderResult,
};
pub use sampler::{Frame, SampleGrid};
pub use scene::{Scene, SceneBuilder, SceneError, SceneResult};
pub use shading::{is_lit_by, shade, trace, SHADOW_BIAS};
pub use sphere::Sphere;
pub use tile::{generate_tiles, render_tile, Tile, TileResult, DEFAULT_TILE_SIZE};
pub use triangle::Triangle;

/// Re-export common math types from umbra_math
pub use umbra_math::{Interval, MathError, Ray, Vec2, Vec3};
