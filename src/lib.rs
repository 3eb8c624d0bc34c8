//! # apod-utils
//!
//! Page behaviors for a static astronomy image gallery.
//!
//! The crate models the handful of browser collaborators a gallery page
//! needs (document, elements, viewport notifications, navigation timing)
//! as plain Rust types, and builds the page behaviors on top of them:
//! a tile coordinate engine for zoomable images, lazy image loading,
//! progress-tracked image downloads, menu and keyboard handling, and a
//! log bus every behavior reports through.

pub mod core;
pub mod loader;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::GalleryConfig,
    geo::{Point, Rect},
    viewport::Viewport,
};

pub use logging::{LogBus, LogLevel, LogRecord};

pub use tiles::{TileCoordinate, TileCoordinateEngine, TileId};

pub use loader::{load_image_with_progress, HttpFetcher, ImageFetcher, ImageLoad};

pub use page::{events::PageEvent, lazy::LazyLoadObserver, Page};

/// The utilities other page scripts share: the tile engine, the
/// progress-tracked image loader and the lazy-load observer.
pub mod utils {
    pub use crate::loader::load_image_with_progress;
    pub use crate::page::lazy::LazyLoadObserver;
    pub use crate::tiles::TileImageLoader;
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tile id: {0}")]
    InvalidTileId(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = GalleryError;

/// Install `env_logger` as the `log` backend. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
