pub mod coord;
pub mod engine;

// Re-exports for convenience
pub use coord::{TileCoordinate, TileId};
pub use engine::TileCoordinateEngine;

/// Name the page scripts know the engine by.
pub type TileImageLoader = TileCoordinateEngine;
