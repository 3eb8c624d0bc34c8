use anyhow::Context;
use apod_utils::prelude::*;

/// Scripted visit to a gallery page. Pass an image URL as the first
/// argument to also download it with progress reporting.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    apod_utils::init_logging();

    let clock = PageLoadClock::start();
    let config = match std::env::args().nth(2) {
        Some(path) => GalleryConfig::from_file(&path)
            .with_context(|| format!("reading config {}", path))?,
        None => GalleryConfig::default(),
    };

    let bus = LogBus::new();
    bus.subscribe_fn(|record| println!("[{}] {}", record.level, record.message));

    let image_url = std::env::args().nth(1);
    let mut page = Page::new(gallery_document(image_url.as_deref()), bus, config);
    page.init();

    page.dispatch(&PageEvent::DomContentLoaded);
    page.dispatch(&PageEvent::ViewportChanged {
        viewport: Rect::from_xywh(0.0, 0.0, 1280.0, 800.0),
    });
    page.dispatch(&PageEvent::click("hamburger"));
    page.dispatch(&PageEvent::click("main"));

    let mut tiles = page.tile_loader("https://apod.nasa.gov/apod/image/full.jpg");
    for zoom in 0..=2 {
        let viewport = Viewport::new(0.0, 0.0, 1280.0, 800.0, zoom);
        let requested = tiles.load_visible(&viewport);
        log::info!("zoom {}: {} new tile(s)", zoom, requested.len());
    }

    if image_url.is_some() {
        let fetcher = HttpFetcher::from_config(page.config()).context("building HTTP client")?;
        let mut last_reported = 0u32;
        let outcome = page
            .load_image("apod", &fetcher, |percent| {
                let decile = (percent / 10.0) as u32;
                if decile > last_reported {
                    last_reported = decile;
                    log::info!("image {:.0}%", percent);
                }
            })
            .await;
        log::info!("image load finished: {:?}", outcome);
    }

    page.dispatch(&PageEvent::key("Escape"));
    page.dispatch(&PageEvent::Load {
        timing: Some(clock.finish()),
    });

    Ok(())
}

fn gallery_document(image_url: Option<&str>) -> Document {
    let mut apod = ImageElement::new("apod").with_bounds(Rect::from_xywh(0.0, 120.0, 960.0, 640.0));
    if let Some(url) = image_url {
        apod = apod.with_src(url);
    }

    Document::new("Astronomy Picture of the Day")
        .with_element(Element::new("hamburger"))
        .with_element(Element::new("mobileMenu"))
        .with_element(Element::new("main"))
        .with_element(Element::new("viewer").with_class("fullscreen-modal"))
        .with_image(apod)
        .with_image(
            ImageElement::new("archive-1")
                .with_data_src("https://apod.nasa.gov/apod/calendar/S_240101.jpg")
                .with_bounds(Rect::from_xywh(0.0, 820.0, 200.0, 200.0)),
        )
        .with_image(
            ImageElement::new("archive-2")
                .with_data_src("https://apod.nasa.gov/apod/calendar/S_240102.jpg")
                .with_bounds(Rect::from_xywh(0.0, 2400.0, 200.0, 200.0)),
        )
}
