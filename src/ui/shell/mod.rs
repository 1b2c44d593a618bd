//! Persistent chrome around the routed page.
//!
//! - [`AppBar`]: sticky top bar with brand, desktop links and menu button
//! - [`NavDrawer`]: right-anchored drawer for narrow viewports
//! - [`AddFab`]: floating "add" button for wide viewports
//! - [`Footer`]: copyright footer
//!
//! The drawer's open state lives in a hidden checkbox ([`DRAWER_TOGGLE_ID`]);
//! the menu button, backdrop and drawer body are labels for it.

mod app_bar;
mod drawer;
mod fab;
mod footer;

pub use app_bar::AppBar;
pub use drawer::{DrawerToggle, NavDrawer};
pub use fab::AddFab;
pub use footer::Footer;

/// Element id of the drawer's open-state checkbox.
pub const DRAWER_TOGGLE_ID: &str = "nav-drawer-toggle";

/// Element id of the drawer itself.
pub const DRAWER_ID: &str = "nav-drawer";
