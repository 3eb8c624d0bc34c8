//! Tile coordinate engine for zoomable gallery images
//!
//! Maps pixel positions and viewports onto the square tile grid of one
//! image, and remembers which tiles were already requested so each is
//! requested once per zoom level. Tiles are never forgotten.

use crate::core::constants::TILE_SIZE;
use crate::core::viewport::Viewport;
use crate::logging::LogBus;
use crate::prelude::HashSet;
use crate::tiles::coord::{TileCoordinate, TileId};
use std::num::NonZeroU32;

#[derive(Debug)]
pub struct TileCoordinateEngine {
    image_url: String,
    tile_size: NonZeroU32,
    loaded_tiles: HashSet<TileId>,
    bus: LogBus,
}

impl TileCoordinateEngine {
    /// Create an engine for `image_url` with square tiles of `tile_size`
    /// pixels. A zero tile size falls back to the default of 256.
    pub fn new(image_url: impl Into<String>, tile_size: u32, bus: LogBus) -> Self {
        let tile_size = NonZeroU32::new(tile_size).unwrap_or_else(|| {
            log::warn!("tile size 0 is not a grid, using {}", TILE_SIZE);
            NonZeroU32::new(TILE_SIZE).unwrap_or(NonZeroU32::MIN)
        });

        Self {
            image_url: image_url.into(),
            tile_size,
            loaded_tiles: HashSet::default(),
            bus,
        }
    }

    /// Create an engine with the default 256 pixel tiles
    pub fn with_default_tile_size(image_url: impl Into<String>, bus: LogBus) -> Self {
        Self::new(image_url, TILE_SIZE, bus)
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size.get()
    }

    fn size(&self) -> f64 {
        f64::from(self.tile_size.get())
    }

    /// The tile containing pixel `(x, y)`.
    ///
    /// Uses floor division, so negative pixels land in negative tiles.
    /// Non-finite input saturates (NaN becomes tile 0).
    pub fn tile_coordinates(&self, x: f64, y: f64, zoom: i32) -> TileCoordinate {
        let size = self.size();
        TileCoordinate::new((x / size).floor() as i64, (y / size).floor() as i64, zoom)
    }

    /// Request a tile. Returns the tile id the first time a tile is requested
    /// and `None` for repeats.
    pub fn load_tile(&mut self, tile_x: i64, tile_y: i64, zoom: i32) -> Option<TileId> {
        let tile_id = TileId::new(zoom, tile_x, tile_y);

        if self.loaded_tiles.contains(&tile_id) {
            return None;
        }

        self.bus.info(format!("Loading tile: {}", tile_id));
        self.loaded_tiles.insert(tile_id);

        Some(tile_id)
    }

    /// Like [`load_tile`](Self::load_tile), invoking `callback` only when the
    /// tile was not requested before.
    pub fn load_tile_with<F>(&mut self, tile_x: i64, tile_y: i64, zoom: i32, callback: F)
    where
        F: FnOnce(&TileId),
    {
        if let Some(tile_id) = self.load_tile(tile_x, tile_y, zoom) {
            callback(&tile_id);
        }
    }

    /// Every tile touching `viewport`, X-major then Y, both ends inclusive.
    ///
    /// The end index is `ceil(edge / size)` and is included, so a viewport
    /// whose edge sits exactly on a tile boundary also gets the next row or
    /// column. Negative extents give an empty list, as does any non-finite
    /// bound.
    pub fn visible_tiles(&self, viewport: &Viewport) -> Vec<TileCoordinate> {
        let size = self.size();
        let start_x = (viewport.x / size).floor();
        let start_y = (viewport.y / size).floor();
        let end_x = (viewport.right() / size).ceil();
        let end_y = (viewport.bottom() / size).ceil();

        if ![start_x, start_y, end_x, end_y].iter().all(|v| v.is_finite()) {
            return Vec::new();
        }

        let (start_x, start_y, end_x, end_y) =
            (start_x as i64, start_y as i64, end_x as i64, end_y as i64);

        let columns = (end_x - start_x + 1).max(0) as usize;
        let rows = (end_y - start_y + 1).max(0) as usize;
        let mut tiles = Vec::with_capacity(columns.saturating_mul(rows));

        for x in start_x..=end_x {
            for y in start_y..=end_y {
                tiles.push(TileCoordinate::new(x, y, viewport.zoom));
            }
        }

        tiles
    }

    /// Request every visible tile not requested yet; returns the new ids in
    /// request order.
    pub fn load_visible(&mut self, viewport: &Viewport) -> Vec<TileId> {
        self.visible_tiles(viewport)
            .into_iter()
            .filter_map(|coord| self.load_tile(coord.tile_x, coord.tile_y, coord.zoom))
            .collect()
    }

    pub fn is_loaded(&self, tile_id: &TileId) -> bool {
        self.loaded_tiles.contains(tile_id)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_tiles.len()
    }

    pub fn loaded_tiles(&self) -> impl Iterator<Item = &TileId> {
        self.loaded_tiles.iter()
    }
}
