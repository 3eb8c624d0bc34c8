use crate::core::constants::{ACTIVE_CLASS, MODAL_CLASSES};
use crate::page::dom::Document;
use crate::page::events::KeyCode;

/// Escape closes every open modal and gives the body its scrollbars back.
/// Returns how many modals were closed.
pub fn on_key_down(doc: &mut Document, key: KeyCode) -> usize {
    if key != KeyCode::Escape {
        return 0;
    }

    let mut closed = 0;
    for element in doc.elements_mut() {
        let is_modal = MODAL_CLASSES
            .iter()
            .any(|class| element.class_list.contains(class));
        if is_modal && element.class_list.remove(ACTIVE_CLASS) {
            closed += 1;
        }
    }

    if closed > 0 {
        doc.body_overflow = Some("auto".to_string());
        log::debug!("closed {} modal(s)", closed);
    }
    closed
}
