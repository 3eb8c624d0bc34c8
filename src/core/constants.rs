//! Page-wide defaults kept in one place so the magic numbers are easy to find.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// How far outside the viewport (in CSS pixels) a lazy image starts loading.
pub const LAZY_LOAD_ROOT_MARGIN: f64 = 50.0;

/// Name of the channel page behaviors report on. Also used as the `log` target.
pub const LOG_CHANNEL: &str = "apod:log";

/// Element id of the hamburger button.
pub const HAMBURGER_ID: &str = "hamburger";

/// Element id of the collapsible mobile menu.
pub const MOBILE_MENU_ID: &str = "mobileMenu";

/// Class marking an open menu or modal.
pub const ACTIVE_CLASS: &str = "active";

/// Classes that identify dismissable modals.
pub const MODAL_CLASSES: [&str; 2] = ["modal", "fullscreen-modal"];

/// User agent sent with image requests.
pub const USER_AGENT: &str = "apod-utils/0.1.0";
