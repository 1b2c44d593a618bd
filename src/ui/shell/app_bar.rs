//! Top application bar.

use leptos::prelude::*;

use super::DRAWER_TOGGLE_ID;
use crate::routes::{AppRoute, HOME_PATH, NAV_LINKS, SITE_NAME};
use crate::ui::components::{MenuIcon, PetsIcon};

/// Sticky bar with the brand on the left and navigation on the right.
///
/// Both the desktop links and the menu button are rendered; the stylesheet
/// shows exactly one of them depending on the `sm` breakpoint.
#[component]
pub fn AppBar(
    /// Route being rendered, used to mark the active link.
    route: AppRoute,
) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let current = link.is_active(&route).then_some("page");
            view! {
                <a href=link.path class="ps-nav-link" aria-current=current>
                    {link.text}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="ps-appbar">
            <div class="ps-toolbar">
                <div class="ps-brand">
                    <PetsIcon />
                    <a href=HOME_PATH class="ps-h6">{SITE_NAME}</a>
                </div>

                <nav class="ps-nav-desktop" aria-label="Main">
                    {links}
                </nav>

                // Pointer target only; the checkbox is the focusable control.
                <label for=DRAWER_TOGGLE_ID class="ps-menu-button" aria-hidden="true">
                    <MenuIcon />
                </label>
            </div>
        </header>
    }
}
