//! Per-pixel supersampling.
//!
//! Each pixel is covered by a uniform `n × n` grid of sample positions
//! (`n = 2^super_sampling_rate`), one ray through the center of each cell.

use umbra_math::Vec2;

use crate::color::{color_to_u32, linear_to_display};
use crate::shading::trace;
use crate::{Camera, Color, Light, RenderConfig, Scene};

/// Sub-pixel sample layout for an image of fixed size.
#[derive(Debug, Clone, Copy)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    rays_per_axis: u32,
    sample_w: f32,
    sample_h: f32,
}

impl SampleGrid {
    pub fn new(config: &RenderConfig) -> Self {
        let rays_per_axis = config.rays_per_axis();
        // Pixel size in normalized device coordinates
        let pix_w = 2.0 / config.width as f32;
        let pix_h = 2.0 / config.height as f32;

        Self {
            width: config.width,
            height: config.height,
            rays_per_axis,
            sample_w: pix_w / rays_per_axis as f32,
            sample_h: pix_h / rays_per_axis as f32,
        }
    }

    pub fn rays_per_pixel(&self) -> u32 {
        self.rays_per_axis * self.rays_per_axis
    }

    /// Normalized device coordinates of `sample` inside pixel `(x, y)`.
    ///
    /// Row 0 is the top of the image (`y = 1`); samples run left to right,
    /// then top to bottom, within the pixel.
    pub fn sample_position(&self, x: u32, y: u32, sample: u32) -> Vec2 {
        let n = self.rays_per_axis;
        let offset_x = ((sample % n) as f32 + 0.5) * self.sample_w;
        let offset_y = ((sample / n) as f32 + 0.5) * self.sample_h;

        let corner_x = (2.0 * x as f32 / self.width as f32) - 1.0;
        let corner_y = -((2.0 * y as f32 / self.height as f32) - 1.0);

        Vec2::new(corner_x + offset_x, corner_y - offset_y)
    }
}

/// Everything needed to shade pixels of one image.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub lights: &'a [Light],
    pub camera: &'a Camera,
    pub config: &'a RenderConfig,
    grid: SampleGrid,
}

impl<'a> Frame<'a> {
    pub fn new(
        scene: &'a Scene,
        lights: &'a [Light],
        camera: &'a Camera,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            scene,
            lights,
            camera,
            config,
            grid: SampleGrid::new(config),
        }
    }

    /// Average linear color over all samples of pixel `(x, y)`.
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let rays_per_pixel = self.grid.rays_per_pixel();
        let weight = 1.0 / rays_per_pixel as f32;
        let mut pixel_color = Color::ZERO;

        for sample in 0..rays_per_pixel {
            let ray = self.camera.get_ray(self.grid.sample_position(x, y, sample));
            pixel_color += trace(ray, self.scene, self.lights, self.config) * weight;
        }

        pixel_color
    }

    /// Display-ready packed `0xRRGGBB` value of pixel `(x, y)`.
    pub fn pixel_value(&self, x: u32, y: u32) -> u32 {
        color_to_u32(linear_to_display(self.render_pixel(x, y)))
    }
}
