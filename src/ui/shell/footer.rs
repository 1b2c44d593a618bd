//! Copyright footer.

use leptos::prelude::*;

use crate::routes::SITE_NAME;

/// Copyright year shown in the footer.
const COPYRIGHT_YEAR: u16 = 2025;

/// Primary-colored footer pinned to the bottom of the shell column.
#[component]
pub fn Footer() -> impl IntoView {
    let notice = format!("© {COPYRIGHT_YEAR} {SITE_NAME}. All rights reserved.");

    view! {
        <footer class="ps-footer">
            <p class="ps-body2">{notice}</p>
        </footer>
    }
}
