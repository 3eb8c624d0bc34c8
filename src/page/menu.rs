//! Hamburger-driven mobile menu

use crate::core::constants::{ACTIVE_CLASS, HAMBURGER_ID, MOBILE_MENU_ID};
use crate::logging::LogBus;
use crate::page::dom::Document;

/// Ids of the hamburger button and the menu it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenu {
    pub hamburger_id: String,
    pub menu_id: String,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self {
            hamburger_id: HAMBURGER_ID.to_string(),
            menu_id: MOBILE_MENU_ID.to_string(),
        }
    }
}

impl MobileMenu {
    /// Attach to `doc`. Returns `None` when the hamburger or the menu is
    /// missing, in which case there is nothing to toggle or close.
    pub fn attach(doc: &Document) -> Option<Self> {
        let menu = Self::default();
        if doc.element(&menu.hamburger_id).is_some() && doc.element(&menu.menu_id).is_some() {
            Some(menu)
        } else {
            log::debug!("mobile menu elements not found, menu disabled");
            None
        }
    }

    /// Toggle both elements and report the menu's new state.
    /// Returns whether the menu is now open.
    pub fn toggle(&self, doc: &mut Document, bus: &LogBus) -> bool {
        if let Some(hamburger) = doc.element_mut(&self.hamburger_id) {
            hamburger.class_list.toggle(ACTIVE_CLASS);
        }
        let open = doc
            .element_mut(&self.menu_id)
            .map(|menu| menu.class_list.toggle(ACTIVE_CLASS))
            .unwrap_or(false);

        bus.info(if open { "Menu opened" } else { "Menu closed" });
        open
    }

    /// Handle a document click. Clicks on the hamburger toggle; clicks
    /// outside both elements close the menu; clicks inside the menu do
    /// nothing.
    pub fn on_click(&self, doc: &mut Document, target: Option<&str>, bus: &LogBus) {
        let Some(target) = target else {
            self.close(doc);
            return;
        };

        let on_hamburger = doc.contains(&self.hamburger_id, target);
        if on_hamburger {
            self.toggle(doc, bus);
        } else if !doc.contains(&self.menu_id, target) {
            self.close(doc);
        }
    }

    pub fn close(&self, doc: &mut Document) {
        for id in [&self.hamburger_id, &self.menu_id] {
            if let Some(element) = doc.element_mut(id) {
                element.class_list.remove(ACTIVE_CLASS);
            }
        }
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.element(&self.menu_id)
            .map(|menu| menu.class_list.contains(ACTIVE_CLASS))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogRecord;
    use crate::page::dom::Element;

    fn document() -> Document {
        Document::new("Gallery")
            .with_element(Element::new("hamburger"))
            .with_element(Element::new("bar").with_parent("hamburger"))
            .with_element(Element::new("mobileMenu"))
            .with_element(Element::new("menuLink").with_parent("mobileMenu"))
            .with_element(Element::new("content"))
    }

    #[test]
    fn test_toggle_logs_state() {
        let bus = LogBus::new();
        let rx = bus.subscribe();
        let mut doc = document();
        let menu = MobileMenu::attach(&doc).unwrap();

        menu.on_click(&mut doc, Some("hamburger"), &bus);
        assert!(menu.is_open(&doc));
        assert!(doc.element("hamburger").unwrap().class_list.contains("active"));

        menu.on_click(&mut doc, Some("bar"), &bus);
        assert!(!menu.is_open(&doc));

        let records: Vec<LogRecord> = rx.try_iter().collect();
        assert_eq!(
            records,
            vec![LogRecord::info("Menu opened"), LogRecord::info("Menu closed")]
        );
    }

    #[test]
    fn test_outside_click_closes_silently() {
        let bus = LogBus::new();
        let mut doc = document();
        let menu = MobileMenu::attach(&doc).unwrap();
        menu.toggle(&mut doc, &bus);
        let rx = bus.subscribe();

        menu.on_click(&mut doc, Some("menuLink"), &bus);
        assert!(menu.is_open(&doc));

        menu.on_click(&mut doc, Some("content"), &bus);
        assert!(!menu.is_open(&doc));
        assert!(!doc.element("hamburger").unwrap().class_list.contains("active"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_missing_elements_disable_menu() {
        let no_menu = Document::new("Bare").with_element(Element::new("hamburger"));
        assert!(MobileMenu::attach(&no_menu).is_none());

        let no_button = Document::new("Bare").with_element(Element::new("mobileMenu"));
        assert!(MobileMenu::attach(&no_button).is_none());
    }
}
