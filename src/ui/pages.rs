//! Routed pages.
//!
//! Pages receive only the URL parameters the router extracted. Each one wraps
//! its content in a `section[data-page]` naming the page.

use leptos::prelude::*;

use crate::routes::{AppRoute, SITE_NAME};
use crate::ui::components::{AddIcon, ButtonVariant, Card, CardContent, CardHeader, LinkButton, PetsIcon};

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let heading = format!("Welcome to {SITE_NAME}");
    let add_href = AppRoute::AddPet.href();

    view! {
        <section class="ps-page" data-page="home">
            <Card>
                <CardHeader>
                    <h1>{heading}</h1>
                </CardHeader>
                <CardContent>
                    <p>"Find a new companion or list a pet looking for a home."</p>
                    <div class="ps-actions">
                        <LinkButton href=add_href>
                            <AddIcon />
                            "Add New Pet"
                        </LinkButton>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}

/// Detail page for one pet.
#[component]
pub fn PetDetailPage(
    /// Pet id from the path.
    id: String,
) -> impl IntoView {
    let heading = format!("Pet {id}");
    let edit_href = AppRoute::EditPet { id }.href();
    let home_href = AppRoute::Home.href();

    view! {
        <section class="ps-page" data-page="pet-detail">
            <Card>
                <CardHeader>
                    <div class="ps-brand">
                        <PetsIcon />
                        <h1>{heading}</h1>
                    </div>
                </CardHeader>
                <CardContent>
                    <div class="ps-actions">
                        <LinkButton href=edit_href>"Edit"</LinkButton>
                        <LinkButton href=home_href variant=ButtonVariant::Outlined>
                            "Back to all pets"
                        </LinkButton>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}

/// Page for listing a new pet.
#[component]
pub fn AddPetPage() -> impl IntoView {
    let home_href = AppRoute::Home.href();

    view! {
        <section class="ps-page" data-page="add-pet">
            <Card>
                <CardHeader>
                    <h1>"Add New Pet"</h1>
                </CardHeader>
                <CardContent>
                    <div class="ps-actions">
                        <LinkButton href=home_href variant=ButtonVariant::Outlined>
                            "Cancel"
                        </LinkButton>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}

/// Page for editing an existing pet.
#[component]
pub fn EditPetPage(
    /// Pet id from the path.
    id: String,
) -> impl IntoView {
    let heading = format!("Edit Pet {id}");
    let detail_href = AppRoute::PetDetail { id }.href();

    view! {
        <section class="ps-page" data-page="edit-pet">
            <Card>
                <CardHeader>
                    <h1>{heading}</h1>
                </CardHeader>
                <CardContent>
                    <div class="ps-actions">
                        <LinkButton href=detail_href variant=ButtonVariant::Outlined>
                            "Cancel"
                        </LinkButton>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}

/// Fallback for paths outside the route table.
#[component]
pub fn NotFoundPage(
    /// Requested path.
    path: String,
) -> impl IntoView {
    let message = format!("Nothing lives at {path}.");
    let home_href = AppRoute::Home.href();

    view! {
        <section class="ps-page" data-page="not-found">
            <Card>
                <CardHeader>
                    <h1>"404"</h1>
                </CardHeader>
                <CardContent>
                    <p>{message}</p>
                    <div class="ps-actions">
                        <LinkButton href=home_href variant=ButtonVariant::Secondary>
                            "Go Home"
                        </LinkButton>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}
