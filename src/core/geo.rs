use serde::{Deserialize, Serialize};

/// A point in page pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// An axis-aligned rectangle in page pixel coordinates, the shape of an
/// element's bounding box or of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Creates a rect from two corners
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a rect from an origin and a size, like `getBoundingClientRect`
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Point::new(x + width, y + height))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks if the rect contains a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if two rects overlap. Touching edges count as overlap, which is
    /// how intersection observers report edge-adjacent targets.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Grows the rect by `margin` on every side (negative shrinks)
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            Point::new(self.min.x - margin, self.min.y - margin),
            Point::new(self.max.x + margin, self.max.y + margin),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersection() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_xywh(50.0, 50.0, 100.0, 100.0);
        let c = Rect::from_xywh(200.0, 200.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let below = Rect::from_xywh(0.0, 100.0, 100.0, 20.0);
        assert!(a.intersects(&below));
    }

    #[test]
    fn test_expand() {
        let viewport = Rect::from_xywh(0.0, 0.0, 800.0, 600.0);
        let expanded = viewport.expand(50.0);
        assert_eq!(expanded.min, Point::new(-50.0, -50.0));
        assert_eq!(expanded.max, Point::new(850.0, 650.0));
        assert!(expanded.contains(&Point::new(830.0, 620.0)));
        assert!(!viewport.contains(&Point::new(830.0, 620.0)));
    }
}
