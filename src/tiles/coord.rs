use crate::GalleryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tile address in the grid of a zoomable image.
///
/// Coordinates are signed: a point left of or above the image origin maps to
/// a negative tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordinate {
    pub tile_x: i64,
    pub tile_y: i64,
    pub zoom: i32,
}

impl TileCoordinate {
    pub fn new(tile_x: i64, tile_y: i64, zoom: i32) -> Self {
        Self {
            tile_x,
            tile_y,
            zoom,
        }
    }

    pub fn id(&self) -> TileId {
        TileId::new(self.zoom, self.tile_x, self.tile_y)
    }
}

/// Key identifying one tile at one zoom level, written `"{zoom}-{x}-{y}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub zoom: i32,
    pub tile_x: i64,
    pub tile_y: i64,
}

impl TileId {
    pub fn new(zoom: i32, tile_x: i64, tile_y: i64) -> Self {
        Self {
            zoom,
            tile_x,
            tile_y,
        }
    }

    pub fn coordinate(&self) -> TileCoordinate {
        TileCoordinate::new(self.tile_x, self.tile_y, self.zoom)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.zoom, self.tile_x, self.tile_y)
    }
}

impl From<TileCoordinate> for TileId {
    fn from(coord: TileCoordinate) -> Self {
        coord.id()
    }
}

/// Splits a leading, optionally negative integer off `s`.
fn take_int(s: &str) -> Option<(&str, &str)> {
    let sign = usize::from(s.starts_with('-'));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    Some(s.split_at(sign + digits))
}

impl FromStr for TileId {
    type Err = GalleryError;

    /// Parses `"{zoom}-{x}-{y}"`. Negative parts keep their own minus sign,
    /// so `"2--1-0"` is zoom 2, x -1, y 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GalleryError::InvalidTileId(s.to_string());

        let (zoom, rest) = take_int(s).ok_or_else(invalid)?;
        let rest = rest.strip_prefix('-').ok_or_else(invalid)?;
        let (x, rest) = take_int(rest).ok_or_else(invalid)?;
        let rest = rest.strip_prefix('-').ok_or_else(invalid)?;
        let (y, rest) = take_int(rest).ok_or_else(invalid)?;
        if !rest.is_empty() {
            return Err(invalid());
        }

        Ok(TileId::new(
            zoom.parse().map_err(|_| invalid())?,
            x.parse().map_err(|_| invalid())?,
            y.parse().map_err(|_| invalid())?,
        ))
    }
}
