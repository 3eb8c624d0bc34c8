/// End-to-end page sessions: a document is built, the page initialized, and
/// browser events replayed against it the way a visitor would produce them.
#[cfg(test)]
mod page_session_tests {
    use apod_utils::prelude::*;
    use apod_utils::utils;

    fn gallery_document() -> Document {
        let mut doc = Document::new("Astronomy Picture of the Day")
            .with_element(Element::new("hamburger"))
            .with_element(Element::new("mobileMenu"))
            .with_element(Element::new("archiveLink").with_parent("mobileMenu"))
            .with_element(Element::new("main"))
            .with_element(
                Element::new("viewer")
                    .with_class("fullscreen-modal")
                    .with_class("active"),
            )
            .with_image(
                ImageElement::new("hero")
                    .with_data_src("https://apod.example/hero.jpg")
                    .with_bounds(Rect::from_xywh(0.0, 80.0, 1024.0, 600.0)),
            )
            .with_image(
                ImageElement::new("thumb-40")
                    .with_data_src("https://apod.example/thumb-40.jpg")
                    .with_bounds(Rect::from_xywh(0.0, 4000.0, 200.0, 200.0)),
            );
        doc.body_overflow = Some("hidden".to_string());
        doc
    }

    fn messages(rx: &crossbeam_channel::Receiver<LogRecord>) -> Vec<String> {
        rx.try_iter().map(|r| r.message).collect()
    }

    #[test]
    fn test_full_visit() {
        let bus = LogBus::new();
        let rx = bus.subscribe();
        let mut page = Page::new(gallery_document(), bus, GalleryConfig::default());
        page.init();

        page.dispatch(&PageEvent::DomContentLoaded);
        page.dispatch(&PageEvent::ViewportChanged {
            viewport: Rect::from_xywh(0.0, 0.0, 1024.0, 768.0),
        });
        page.dispatch(&PageEvent::click("hamburger"));
        page.dispatch(&PageEvent::click("archiveLink"));
        page.dispatch(&PageEvent::click("main"));
        page.dispatch(&PageEvent::key("Escape"));
        page.dispatch(&PageEvent::Load {
            timing: Some(NavigationTiming::new(0, 1_870)),
        });
        page.dispatch(&PageEvent::Offline);
        page.dispatch(&PageEvent::Online);

        assert_eq!(
            messages(&rx),
            vec![
                "Page loaded: Astronomy Picture of the Day",
                "Lazy loaded image",
                "Menu opened",
                "Page load time: 1.87s",
                "Network connection lost",
                "Network connection restored",
            ]
        );

        let doc = page.document();
        assert_eq!(doc.image("hero").unwrap().src.as_deref(), Some("https://apod.example/hero.jpg"));
        assert!(doc.image("thumb-40").unwrap().data_src.is_some());
        assert!(!page.menu().unwrap().is_open(doc));
        assert!(!doc.element("viewer").unwrap().class_list.contains("active"));
        assert_eq!(doc.body_overflow.as_deref(), Some("auto"));
        assert_eq!(page.observer().observed_count(), 1);
    }

    #[test]
    fn test_page_without_menu_ignores_clicks() {
        let bus = LogBus::new();
        let rx = bus.subscribe();
        let doc = Document::new("Bare").with_element(Element::new("hamburger"));
        let mut page = Page::new(doc, bus, GalleryConfig::default());
        page.init();

        page.dispatch(&PageEvent::click("hamburger"));

        assert!(page.menu().is_none());
        assert!(messages(&rx).is_empty());
        assert!(!page
            .document()
            .element("hamburger")
            .unwrap()
            .class_list
            .contains("active"));
    }

    #[test]
    fn test_events_before_init_do_not_lazy_load() {
        let bus = LogBus::new();
        let mut page = Page::new(gallery_document(), bus, GalleryConfig::default());

        page.dispatch(&PageEvent::ViewportChanged {
            viewport: Rect::from_xywh(0.0, 0.0, 1024.0, 768.0),
        });

        assert!(page.document().image("hero").unwrap().data_src.is_some());
    }

    #[test]
    fn test_tile_loader_follows_page_config() {
        let bus = LogBus::new();
        let rx = bus.subscribe();
        let config = GalleryConfig::from_json_str(r#"{ "tile_size": 512 }"#).unwrap();
        let page = Page::new(gallery_document(), bus, config);

        let mut tiles: utils::TileImageLoader = page.tile_loader("https://apod.example/m31-huge.tif");
        assert_eq!(tiles.tile_size(), 512);

        let viewport = Viewport::new(0.0, 0.0, 1024.0, 512.0, 3);
        let requested = tiles.load_visible(&viewport);

        // x 0..=2, y 0..=1
        assert_eq!(requested.len(), 6);
        assert_eq!(requested[0].to_string(), "3-0-0");
        assert_eq!(messages(&rx).len(), 6);
        assert!(tiles.load_visible(&viewport).is_empty());
    }

    #[test]
    fn test_bus_shared_across_threads() {
        let bus = LogBus::new();
        let rx = bus.subscribe();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let bus = bus.clone();
                std::thread::spawn(move || bus.info(format!("worker {}", i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(rx.try_iter().count(), 4);
    }
}
