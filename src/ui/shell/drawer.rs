//! Navigation drawer.

use leptos::prelude::*;

use super::{DRAWER_ID, DRAWER_TOGGLE_ID};
use crate::routes::NAV_LINKS;

/// Visually hidden checkbox holding the drawer's open state.
///
/// Must precede [`AppBar`](super::AppBar) and [`NavDrawer`] as a sibling so the
/// `:checked ~` and `:focus-visible ~` rules apply. It stays in the tab order
/// below `sm`, so Space opens the drawer from the keyboard.
#[component]
pub fn DrawerToggle() -> impl IntoView {
    view! {
        <input
            type="checkbox"
            id=DRAWER_TOGGLE_ID
            class="ps-drawer-toggle"
            aria-label="Open navigation menu"
            aria-controls=DRAWER_ID
        />
    }
}

/// Right-anchored drawer listing the navigation links.
///
/// Clicking the backdrop or anywhere in the panel toggles the checkbox back
/// off; clicking a link navigates.
#[component]
pub fn NavDrawer() -> impl IntoView {
    let items = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.path class="ps-list-item" role="listitem">
                    {link.text}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav id=DRAWER_ID class="ps-drawer" aria-label="Navigation drawer">
            <label for=DRAWER_TOGGLE_ID class="ps-drawer-backdrop" aria-hidden="true"></label>
            <label for=DRAWER_TOGGLE_ID class="ps-drawer-panel" role="presentation">
                <span class="ps-list" role="list">
                    {items}
                </span>
            </label>
        </nav>
    }
}
