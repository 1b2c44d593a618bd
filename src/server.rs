use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    Router, ServiceExt,
    extract::{Path, Request, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::{IntoMakeService, get},
};
use tower_http::normalize_path::NormalizePath;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::ShellError;
use crate::routes::{ADD_PET_PATH, AppRoute, EDIT_PET_PATH, HOME_PATH, PET_DETAIL_PATH};
use crate::theme::Theme;
use crate::ui::{ShellContext, render_page};

/// Extra stylesheet linked into every page when present in the static dir.
const CUSTOM_STYLESHEET: &str = "app.css";

/// Build the shared state for `config` and `theme`.
///
/// Links `/static/app.css` only if the file exists, so pages never reference
/// a missing asset.
pub fn build_state(config: Arc<AppConfig>, theme: &Theme) -> AppState {
    let mut shell = ShellContext::new(theme);
    if FsPath::new(&config.server.static_dir)
        .join(CUSTOM_STYLESHEET)
        .is_file()
    {
        shell = shell.with_custom_stylesheet(format!("/static/{CUSTOM_STYLESHEET}"));
    }

    AppState {
        config,
        shell: Arc::new(shell),
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Pages
        .route(HOME_PATH, get(home_handler))
        .route(PET_DETAIL_PATH, get(pet_detail_handler))
        .route(ADD_PET_PATH, get(add_pet_handler))
        .route(EDIT_PET_PATH, get(edit_pet_handler))
        // Static assets
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router wrapped so `/add/` and `/pets/42/` resolve like `/add` and `/pets/42`.
///
/// Trailing slashes must be trimmed before routing, so this wraps the router
/// as a service instead of adding a router layer.
pub fn build_app(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    let app = NormalizePath::trim_trailing_slash(build_router(state));
    ServiceExt::<Request>::into_make_service(app)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>, theme: &Theme) -> Result<(), ShellError> {
    let addr = config.bind_address();
    let app = build_app(build_state(config, theme));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

fn page(state: &AppState, route: &AppRoute) -> Html<String> {
    debug!(route = ?route, "Rendering page");
    Html(render_page(&state.shell, route))
}

/// GET / - Home page.
async fn home_handler(State(state): State<AppState>) -> Html<String> {
    page(&state, &AppRoute::Home)
}

/// GET /pets/{id} - Pet detail page.
async fn pet_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    page(&state, &AppRoute::PetDetail { id })
}

/// GET /add - Add pet page.
async fn add_pet_handler(State(state): State<AppState>) -> Html<String> {
    page(&state, &AppRoute::AddPet)
}

/// GET /edit/{id} - Edit pet page.
async fn edit_pet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    page(&state, &AppRoute::EditPet { id })
}

/// Anything outside the route table renders the 404 page inside the shell.
async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();
    info!(name: "route.not_found", path = %path, "No route matched");
    (StatusCode::NOT_FOUND, page(&state, &AppRoute::NotFound { path }))
}
