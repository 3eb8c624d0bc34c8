//! Page composition root
//!
//! `Page` owns the document and the log bus and wires the individual
//! behaviors together. Nothing happens on construction; behaviors are
//! attached by [`Page::init`] and driven by [`Page::dispatch`].

pub mod dom;
pub mod events;
pub mod keyboard;
pub mod lazy;
pub mod menu;
pub mod network;
pub mod perf;

use crate::core::config::GalleryConfig;
use crate::loader::{load_image_with_progress, ImageFetcher, ImageLoad};
use crate::logging::LogBus;
use crate::tiles::TileImageLoader;
use dom::Document;
use events::PageEvent;
use lazy::LazyLoadObserver;
use menu::MobileMenu;
use network::NetworkStatus;

pub struct Page {
    document: Document,
    bus: LogBus,
    config: GalleryConfig,
    menu: Option<MobileMenu>,
    observer: LazyLoadObserver,
}

impl Page {
    pub fn new(document: Document, bus: LogBus, config: GalleryConfig) -> Self {
        let observer = LazyLoadObserver::with_root_margin(config.lazy_root_margin, bus.clone());
        Self {
            document,
            bus,
            config,
            menu: None,
            observer,
        }
    }

    /// Attach the mobile menu and start observing lazy images
    pub fn init(&mut self) {
        self.menu = MobileMenu::attach(&self.document);
        let observed = self.observer.observe_pending(&self.document);
        log::debug!(
            "page initialized: menu {}, {} lazy image(s)",
            if self.menu.is_some() { "attached" } else { "absent" },
            observed
        );
    }

    /// Route one browser event to the behaviors interested in it
    pub fn dispatch(&mut self, event: &PageEvent) {
        match event {
            PageEvent::DomContentLoaded => {
                self.bus
                    .success(format!("Page loaded: {}", self.document.title));
            }
            PageEvent::Click { target } => {
                if let Some(menu) = &self.menu {
                    menu.on_click(&mut self.document, target.as_deref(), &self.bus);
                }
            }
            PageEvent::KeyDown { key } => {
                keyboard::on_key_down(&mut self.document, *key);
            }
            PageEvent::Load { timing } => perf::on_load(timing.as_ref(), &self.bus),
            PageEvent::ViewportChanged { viewport } => {
                self.observer
                    .on_viewport_changed(&mut self.document, *viewport);
            }
            PageEvent::Online => network::on_status_change(NetworkStatus::Online, &self.bus),
            PageEvent::Offline => network::on_status_change(NetworkStatus::Offline, &self.bus),
        }
    }

    /// A tile engine for `image_url` sized by the page config and reporting
    /// on the page bus
    pub fn tile_loader(&self, image_url: impl Into<String>) -> TileImageLoader {
        TileImageLoader::new(image_url, self.config.tile_size, self.bus.clone())
    }

    /// Fetch the image with this id, reporting percent progress. Unknown ids
    /// and images without a source resolve to [`ImageLoad::NoSource`].
    pub async fn load_image<F, P>(&mut self, image_id: &str, fetcher: &F, on_progress: P) -> ImageLoad
    where
        F: ImageFetcher + ?Sized,
        P: FnMut(f64) + Send,
    {
        match self.document.image_mut(image_id) {
            Some(img) => load_image_with_progress(img, fetcher, &self.bus, on_progress).await,
            None => ImageLoad::NoSource,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn bus(&self) -> &LogBus {
        &self.bus
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn observer(&self) -> &LazyLoadObserver {
        &self.observer
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }
}
