//! Render driver.
//!
//! Validates the inputs, splits the image into tiles, shades every tile and
//! assembles the packed pixel buffer. With the `parallel` feature tiles are
//! rendered on the rayon thread pool; the output is identical either way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::config::ConfigError;
use crate::light::validate_lights;
use crate::sampler::Frame;
use crate::scene::SceneError;
use crate::tile::{generate_tiles, render_tile, Tile, TileResult};
use crate::{Camera, Light, RenderConfig, Scene};

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("render cancelled")]
    Cancelled,
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Row-major image of packed `0xRRGGBB` pixels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    /// Copy a rendered tile into place.
    pub fn write_tile(&mut self, result: &TileResult) {
        let tile = &result.tile;
        let row_len = tile.width as usize;

        for (row, src) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.index(tile.x, tile.y + row as u32);
            self.pixels[start..start + row_len].copy_from_slice(src);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Shared flag for stopping a render between tiles.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; tiles already being rendered still finish.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Render the scene to a pixel buffer.
pub fn render(
    scene: &Scene,
    lights: &[Light],
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<PixelBuffer> {
    render_with_cancel(scene, lights, camera, config, &CancelToken::new())
}

/// Render the scene, checking `cancel` before each tile.
pub fn render_with_cancel(
    scene: &Scene,
    lights: &[Light],
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> RenderResult<PixelBuffer> {
    config.validate()?;
    validate_lights(lights)?;

    if scene.is_empty() {
        log::warn!("Scene has no primitives; every pixel will be background");
    }
    if lights.is_empty() {
        log::warn!("Scene has no lights");
    }

    let tiles = generate_tiles(config.width, config.height, config.tile_size);
    let frame = Frame::new(scene, lights, camera, config);

    log::info!(
        "Rendering {}x{} @ {} rays/pixel, {} bounces, {} tiles",
        config.width,
        config.height,
        config.rays_per_pixel(),
        config.reflection_count,
        tiles.len()
    );

    let start = Instant::now();
    let results = render_tiles(&tiles, &frame, cancel)?;

    let mut image = PixelBuffer::new(config.width, config.height);
    for result in &results {
        image.write_tile(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

#[cfg(feature = "parallel")]
fn render_tiles(
    tiles: &[Tile],
    frame: &Frame<'_>,
    cancel: &CancelToken,
) -> RenderResult<Vec<TileResult>> {
    use rayon::prelude::*;

    tiles
        .par_iter()
        .map(|tile| render_tile_checked(tile, frame, cancel))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn render_tiles(
    tiles: &[Tile],
    frame: &Frame<'_>,
    cancel: &CancelToken,
) -> RenderResult<Vec<TileResult>> {
    tiles
        .iter()
        .map(|tile| render_tile_checked(tile, frame, cancel))
        .collect()
}

fn render_tile_checked(
    tile: &Tile,
    frame: &Frame<'_>,
    cancel: &CancelToken,
) -> RenderResult<TileResult> {
    if cancel.is_cancelled() {
        return Err(RenderError::Cancelled);
    }
    Ok(render_tile(tile, frame))
}
