//! PetStore Shell
//!
//! Server-rendered shell of the pet-store web application: app bar,
//! responsive navigation drawer, routing, theming and footer.
//!
//! # Architecture
//!
//! - **Server**: Axum router mapping the route table onto page renders
//! - **UI**: Leptos SSR components, styled by a generated theme stylesheet
//! - **Config**: CLI flags, environment and an optional YAML file
//!
//! # Modules
//!
//! - [`config`]: Layered configuration
//! - [`error`]: Startup error types
//! - [`routes`]: Route table and navigation links
//! - [`server`]: HTTP router and handlers
//! - [`theme`]: Palette, typography, breakpoints and stylesheet
//! - [`ui`]: Leptos components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod theme;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::ui::ShellContext;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Prerendered theme and stylesheet links.
    pub shell: Arc<ShellContext>,
}
