use std::fs;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use petstore_shell::config::{AppConfig, ServerConfig, ThemeConfig};
use petstore_shell::routes::AppRoute;
use petstore_shell::server::{build_app, build_state};
use petstore_shell::theme::Theme;

fn test_config(static_dir: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: static_dir.to_string(),
        },
        theme: ThemeConfig::default(),
    })
}

fn test_server(static_dir: &str) -> TestServer {
    let state = build_state(test_config(static_dir), &Theme::default());
    TestServer::new(build_app(state)).expect("Failed to build test server")
}

/// Asserts the chrome every page shares.
fn assert_shell(html: &str) {
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"class="ps-appbar""#), "app bar missing");
    assert!(html.contains(r#"class="ps-drawer""#), "drawer missing");
    assert!(html.contains(r#"id="nav-drawer-toggle""#), "drawer toggle missing");
    assert!(html.contains(r#"class="ps-fab""#), "fab missing");
    assert!(html.contains(r#"aria-label="add""#));
    assert!(html.contains("© 2025 PetStore. All rights reserved."));
    assert!(html.contains("--ps-primary:#4a148c"), "theme stylesheet missing");
    // Nav links in both the app bar and the drawer.
    assert_eq!(html.matches(r#"class="ps-nav-link""#).count(), 2);
    assert_eq!(html.matches(r#"class="ps-list-item""#).count(), 2);
    assert!(html.contains(r#"href="/add""#));
}

#[tokio::test]
async fn test_home_page() {
    let server = test_server("static");

    let response = server.get("/").await;
    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert_eq!(content_type.to_str().unwrap(), "text/html; charset=utf-8");

    let html = response.text();
    assert_shell(&html);
    assert!(html.contains(r#"data-page="home""#));
    assert!(html.contains("<title>PetStore</title>"));
    assert!(html.contains(r#"aria-current="page""#));
}

#[tokio::test]
async fn test_pet_detail_page() {
    let server = test_server("static");

    let response = server.get("/pets/42").await;
    response.assert_status_ok();

    let html = response.text();
    assert_shell(&html);
    assert!(html.contains(r#"data-page="pet-detail""#));
    assert!(html.contains("Pet 42"));
    assert!(html.contains(r#"href="/edit/42""#));
    assert!(!html.contains(r#"aria-current="page""#));
}

#[tokio::test]
async fn test_add_pet_page() {
    let server = test_server("static");

    let response = server.get("/add").await;
    response.assert_status_ok();

    let html = response.text();
    assert_shell(&html);
    assert!(html.contains(r#"data-page="add-pet""#));
    assert!(html.contains("<title>Add New Pet - PetStore</title>"));
}

#[tokio::test]
async fn test_edit_pet_page() {
    let server = test_server("static");

    let response = server.get("/edit/7").await;
    response.assert_status_ok();

    let html = response.text();
    assert_shell(&html);
    assert!(html.contains(r#"data-page="edit-pet""#));
    assert!(html.contains("Edit Pet 7"));
    assert!(html.contains(r#"href="/pets/7""#));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_in_shell() {
    let server = test_server("static");

    for path in ["/nope", "/pets", "/pets/1/extra", "/edit"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let html = response.text();
        assert_shell(&html);
        assert!(html.contains(r#"data-page="not-found""#), "{path} should 404");
    }
}

#[tokio::test]
async fn test_drawer_is_keyboard_reachable_and_labelled() {
    let server = test_server("static");
    let html = server.get("/").await.text();

    // The checkbox is the focusable control; nothing takes it out of the tab order.
    assert!(!html.contains(r#"tabindex="-1""#));
    assert!(html.contains(
        r#"class="ps-drawer-toggle" aria-label="Open navigation menu" aria-controls="nav-drawer""#
    ));
    assert!(html.contains(r#"<nav id="nav-drawer" class="ps-drawer" aria-label="Navigation drawer">"#));
}

#[tokio::test]
async fn test_trailing_slash_resolves_to_same_page() {
    let server = test_server("static");

    for (path, page) in [
        ("/add/", "add-pet"),
        ("/pets/42/", "pet-detail"),
        ("/edit/7/", "edit-pet"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(
            response.text().contains(&format!(r#"data-page="{page}""#)),
            "{path} should render {page}"
        );
    }

    // The root stays the home page.
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains(r#"data-page="home""#));
}

#[tokio::test]
async fn test_href_reaches_same_route_and_id() {
    let server = test_server("static");
    let id = "tabby cat/2";

    let href = AppRoute::PetDetail { id: id.to_string() }.href();
    let response = server.get(&href).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"data-page="pet-detail""#));
    assert!(html.contains("Pet tabby cat/2"));
}

#[tokio::test]
async fn test_route_params_are_escaped() {
    let server = test_server("static");

    let response = server.get("/pets/%3Cscript%3E").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Pet &lt;script&gt;"));
    assert!(!html.contains("Pet <script>"));
}

#[tokio::test]
async fn test_custom_stylesheet_is_linked_and_served() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("app.css"), "body{color:red}").expect("Failed to write app.css");
    let server = test_server(dir.path().to_str().expect("utf-8 temp path"));

    let html = server.get("/").await.text();
    assert!(html.contains(r#"href="/static/app.css""#));

    let css = server.get("/static/app.css").await;
    css.assert_status_ok();
    assert_eq!(css.text(), "body{color:red}");
}

#[tokio::test]
async fn test_custom_stylesheet_omitted_when_absent() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let server = test_server(dir.path().to_str().expect("utf-8 temp path"));

    let html = server.get("/").await.text();
    assert!(!html.contains("/static/app.css"));
}
