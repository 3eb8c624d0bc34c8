//! Lazy image loading
//!
//! Images carrying a deferred `data-src` are observed; once an image comes
//! within the root margin of the visible window its source is swapped in
//! and it stops being observed.

use crate::core::constants::LAZY_LOAD_ROOT_MARGIN;
use crate::core::geo::Rect;
use crate::logging::LogBus;
use crate::page::dom::Document;

#[derive(Debug, Clone)]
pub struct LazyLoadObserver {
    root_margin: f64,
    observed: Vec<String>,
    bus: LogBus,
}

impl LazyLoadObserver {
    pub fn new(bus: LogBus) -> Self {
        Self::with_root_margin(LAZY_LOAD_ROOT_MARGIN, bus)
    }

    pub fn with_root_margin(root_margin: f64, bus: LogBus) -> Self {
        Self {
            root_margin,
            observed: Vec::new(),
            bus,
        }
    }

    pub fn root_margin(&self) -> f64 {
        self.root_margin
    }

    /// Start watching the image with this id. Watching twice is a no-op.
    pub fn observe(&mut self, image_id: impl Into<String>) {
        let image_id = image_id.into();
        if !self.is_observed(&image_id) {
            self.observed.push(image_id);
        }
    }

    pub fn unobserve(&mut self, image_id: &str) {
        self.observed.retain(|id| id != image_id);
    }

    pub fn is_observed(&self, image_id: &str) -> bool {
        self.observed.iter().any(|id| id == image_id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Observe every image in `doc` that still has a deferred source.
    /// Returns how many were added.
    pub fn observe_pending(&mut self, doc: &Document) -> usize {
        let before = self.observed.len();
        let pending: Vec<String> = doc
            .images()
            .filter(|img| img.data_src.is_some())
            .map(|img| img.id.clone())
            .collect();
        for id in pending {
            self.observe(id);
        }
        self.observed.len() - before
    }

    /// Process a viewport notification: load every observed image that now
    /// intersects the margin-expanded viewport. Returns the ids loaded.
    pub fn on_viewport_changed(&mut self, doc: &mut Document, viewport: Rect) -> Vec<String> {
        let root = viewport.expand(self.root_margin);
        let mut loaded = Vec::new();

        for id in self.observed.clone() {
            let Some(img) = doc.image_mut(&id) else {
                continue;
            };
            if !img.bounds.intersects(&root) {
                continue;
            }
            // Intersecting images without a deferred source stay observed.
            if img.promote_data_src() {
                self.unobserve(&id);
                self.bus.info("Lazy loaded image");
                loaded.push(id);
            }
        }

        loaded
    }
}
