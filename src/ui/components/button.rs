//! Link button with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary palette color.
    #[default]
    Primary,
    /// Filled with the secondary palette color.
    Secondary,
    /// Transparent with a primary outline.
    Outlined,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "ps-button ps-button-primary",
            Self::Secondary => "ps-button ps-button-secondary",
            Self::Outlined => "ps-button ps-button-outlined",
        }
    }
}

/// Anchor styled as a button.
///
/// Navigation in the shell is plain links, so buttons are anchors.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <LinkButton href="/add" variant=ButtonVariant::Secondary>"Add"</LinkButton>
/// }
/// ```
#[component]
pub fn LinkButton(
    /// Link target.
    #[prop(into)]
    href: String,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = variant.classes();

    view! {
        <a href=href class=classes role="button">
            {children()}
        </a>
    }
}
