//! Configuration for the gallery page behaviors
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes.

use crate::core::constants::{LAZY_LOAD_ROOT_MARGIN, TILE_SIZE, USER_AGENT};
use crate::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Edge length of a square image tile, in pixels
    pub tile_size: u32,
    /// Pre-trigger margin around the viewport for lazy images, in pixels
    pub lazy_root_margin: f64,
    /// User agent sent with image requests
    pub user_agent: String,
    /// Optional request timeout. Image requests have none unless set.
    pub request_timeout_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            lazy_root_margin: LAZY_LOAD_ROOT_MARGIN,
            user_agent: USER_AGENT.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl GalleryConfig {
    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(GalleryError::Config("tile_size must be positive".into()));
        }
        if !self.lazy_root_margin.is_finite() {
            return Err(GalleryError::Config(
                "lazy_root_margin must be a finite number".into(),
            ));
        }
        Ok(())
    }

    /// Settings for tests: short timeout, no lazy pre-trigger
    pub fn for_testing() -> Self {
        Self {
            lazy_root_margin: 0.0,
            request_timeout_ms: Some(2_000),
            ..Self::default()
        }
    }
}
