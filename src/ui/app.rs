//! Document, shell layout and route outlet.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::theme::Theme;
use crate::ui::pages::{AddPetPage, EditPetPage, HomePage, NotFoundPage, PetDetailPage};
use crate::ui::shell::{AddFab, AppBar, DrawerToggle, Footer, NavDrawer};

/// Per-process rendering inputs shared by every page.
#[derive(Debug, Clone)]
pub struct ShellContext {
    /// Theme stylesheet, rendered once at startup.
    pub stylesheet: String,
    /// Optional extra stylesheet linked after the theme.
    pub custom_stylesheet: Option<String>,
}

impl ShellContext {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            stylesheet: theme.stylesheet(),
            custom_stylesheet: None,
        }
    }

    #[must_use]
    pub fn with_custom_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.custom_stylesheet = Some(href.into());
        self
    }
}

/// Render the full HTML document for `route`.
pub fn render_page(ctx: &ShellContext, route: &AppRoute) -> String {
    let stylesheet = ctx.stylesheet.clone();
    let custom_stylesheet = ctx.custom_stylesheet.clone();
    let route = route.clone();

    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <Document route=route stylesheet=stylesheet custom_stylesheet=custom_stylesheet />
        }
        .to_html()
    });

    format!("<!DOCTYPE html>{html}")
}

/// Root `<html>` element.
#[component]
pub fn Document(
    route: AppRoute,
    stylesheet: String,
    custom_stylesheet: Option<String>,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Browse, add and edit pets" />
                <title>{route.title()}</title>
                <style inner_html=stylesheet></style>
                {custom_stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> })}
            </head>
            <body>
                <AppShell route=route />
            </body>
        </html>
    }
}

/// Column layout: app bar, drawer, page container, floating button, footer.
#[component]
pub fn AppShell(route: AppRoute) -> impl IntoView {
    view! {
        <div id="app-shell" class="ps-shell">
            <DrawerToggle />
            <AppBar route=route.clone() />
            <NavDrawer />

            <main id="app" class="ps-container">
                <RouteOutlet route=route />
            </main>

            <AddFab />
            <Footer />
        </div>
    }
}

/// Renders the page matching `route`.
#[component]
pub fn RouteOutlet(route: AppRoute) -> impl IntoView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::PetDetail { id } => view! { <PetDetailPage id=id /> }.into_any(),
        AppRoute::AddPet => view! { <AddPetPage /> }.into_any(),
        AppRoute::EditPet { id } => view! { <EditPetPage id=id /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
    }
}
