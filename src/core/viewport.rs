use crate::core::geo::Rect;
use serde::{Deserialize, Serialize};

/// The visible pixel window into a full-size image, at a zoom level.
///
/// Supplied by the caller per query; nothing here is validated, so negative
/// or non-finite extents simply flow through the tile arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub zoom: i32,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64, zoom: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            zoom,
        }
    }

    /// Right edge in pixels
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge in pixels
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The pixel rectangle covered by this viewport
    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    /// Same window, panned by the given pixel offset
    pub fn panned(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same window at another zoom level
    pub fn with_zoom(&self, zoom: i32) -> Self {
        Self { zoom, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let viewport = Viewport::new(10.0, 20.0, 300.0, 200.0, 1);
        assert_eq!(viewport.right(), 310.0);
        assert_eq!(viewport.bottom(), 220.0);
        assert_eq!(viewport.rect().width(), 300.0);
    }

    #[test]
    fn test_pan_keeps_size_and_zoom() {
        let viewport = Viewport::new(0.0, 0.0, 100.0, 100.0, 3).panned(-20.0, 40.0);
        assert_eq!(viewport.x, -20.0);
        assert_eq!(viewport.y, 40.0);
        assert_eq!(viewport.width, 100.0);
        assert_eq!(viewport.zoom, 3);
        assert_eq!(viewport.with_zoom(4).zoom, 4);
    }
}
