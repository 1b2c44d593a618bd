//! Card component with header and content sections.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <h1>"Title"</h1>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Card content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ps-card">
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Header content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ps-card-header">
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ps-card-content">
            {children()}
        </div>
    }
}
