use crate::core::geo::Rect;
use crate::page::perf::NavigationTiming;
use serde::{Deserialize, Serialize};

/// Browser events the page reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// Document parsed and ready
    DomContentLoaded,
    /// Click anywhere in the document, on the element with this id
    Click { target: Option<String> },
    /// Key pressed
    KeyDown { key: KeyCode },
    /// Window `load`; `timing` is `None` where no performance API exists
    Load { timing: Option<NavigationTiming> },
    /// Visible window moved or resized
    ViewportChanged { viewport: Rect },
    /// Connection came back
    Online,
    /// Connection dropped
    Offline,
}

/// Keyboard keys, by their `KeyboardEvent.key` names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Tab,
    Other(u32),
}

impl KeyCode {
    /// Map a `KeyboardEvent.key` string; unknown keys keep their first char
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Escape" | "Esc" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            " " => KeyCode::Space,
            "Tab" => KeyCode::Tab,
            other => KeyCode::Other(other.chars().next().map(u32::from).unwrap_or(0)),
        }
    }
}

impl PageEvent {
    pub fn click(target: impl Into<String>) -> Self {
        PageEvent::Click {
            target: Some(target.into()),
        }
    }

    pub fn key(key: &str) -> Self {
        PageEvent::KeyDown {
            key: KeyCode::from_key(key),
        }
    }

    /// Checks if this is a keyboard event
    pub fn is_keyboard_event(&self) -> bool {
        matches!(self, PageEvent::KeyDown { .. })
    }

    /// Checks if this is an online/offline notification
    pub fn is_network_event(&self) -> bool {
        matches!(self, PageEvent::Online | PageEvent::Offline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_key("Escape"), KeyCode::Escape);
        assert_eq!(KeyCode::from_key("Esc"), KeyCode::Escape);
        assert_eq!(KeyCode::from_key(" "), KeyCode::Space);
        assert_eq!(KeyCode::from_key("q"), KeyCode::Other('q' as u32));
    }

    #[test]
    fn test_event_type_checks() {
        assert!(PageEvent::key("Escape").is_keyboard_event());
        assert!(!PageEvent::click("hamburger").is_keyboard_event());
        assert!(PageEvent::Offline.is_network_event());
        assert!(!PageEvent::DomContentLoaded.is_network_event());
    }
}
