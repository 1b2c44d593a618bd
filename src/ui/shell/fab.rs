//! Floating action button.

use leptos::prelude::*;

use crate::routes::ADD_PET_PATH;
use crate::ui::components::AddIcon;

/// Secondary-colored round button linking to the add page.
/// Hidden below the `sm` breakpoint.
#[component]
pub fn AddFab() -> impl IntoView {
    view! {
        <a href=ADD_PET_PATH class="ps-fab" aria-label="add">
            <AddIcon />
        </a>
    }
}
