//! Prelude module for common apod-utils types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use apod_utils::prelude::*;`

pub use crate::core::{
    config::GalleryConfig,
    geo::{Point, Rect},
    viewport::Viewport,
};

pub use crate::logging::{LogBus, LogLevel, LogRecord};

pub use crate::tiles::{TileCoordinate, TileCoordinateEngine, TileId, TileImageLoader};

pub use crate::loader::{
    load_image_with_progress, FetchResponse, HttpFetcher, ImageFetcher, ImageLoad,
};

pub use crate::page::{
    dom::{Document, Element, ImageElement},
    events::{KeyCode, PageEvent},
    lazy::LazyLoadObserver,
    network::NetworkStatus,
    perf::{NavigationTiming, PageLoadClock},
    Page,
};

pub use crate::{Error as GalleryError, Result};

pub use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
