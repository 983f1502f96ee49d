//! Tile-based rendering.
//!
//! Divides the image into disjoint rectangular tiles. Each tile only reads
//! the shared scene and writes its own pixels, so tiles can be rendered in
//! any order or in parallel.

use crate::sampler::Frame;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of tile's top-left corner
    pub x: u32,
    /// Y coordinate of tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in the render order
    pub index: usize,
}

impl Tile {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Cover a `width × height` image with tiles in row-major order.
///
/// Tiles on the right and bottom edges are clipped to the image.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, index));
            index += 1;
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Result of rendering a tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    /// The tile that was rendered
    pub tile: Tile,
    /// Packed `0xRRGGBB` pixels in row-major order within the tile
    pub pixels: Vec<u32>,
}

/// Render a single tile.
pub fn render_tile(tile: &Tile, frame: &Frame<'_>) -> TileResult {
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            pixels.push(frame.pixel_value(tile.x + local_x, tile.y + local_y));
        }
    }

    log::debug!(
        "Tile {} done: {}x{} at ({}, {})",
        tile.index,
        tile.width,
        tile.height,
        tile.x,
        tile.y
    );

    TileResult {
        tile: *tile,
        pixels,
    }
}
