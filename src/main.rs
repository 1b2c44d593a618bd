//! PetStore Shell Server
//!
//! Entry point for the server-rendered pet-store shell.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use petstore_shell::config::AppConfig;
use petstore_shell::error::ShellError;
use petstore_shell::server::start_server;
use petstore_shell::theme::Theme;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before config reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load().map_err(ShellError::from)?;
    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir,
        "Configuration loaded"
    );

    let theme = Theme::from_config(&config.theme).map_err(ShellError::from)?;
    info!(
        name: "theme.built",
        primary = %theme.palette.primary.main,
        secondary = %theme.palette.secondary.main,
        "Theme built"
    );

    start_server(Arc::new(config), &theme).await?;
    Ok(())
}
