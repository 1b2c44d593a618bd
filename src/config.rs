use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

/// Prefix for `config`-style environment overrides, e.g. `PETSTORE_SERVER__PORT`.
const ENV_PREFIX: &str = "PETSTORE";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

/// Raw theme overrides. Validated by [`Theme::from_config`](crate::theme::Theme::from_config).
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub font_family: String,
    pub border_radius: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#4a148c".to_string(),
            secondary: "#ff6f00".to_string(),
            background: "#f3f3f3".to_string(),
            font_family: r#""Poppins", "Roboto", sans-serif"#.to_string(),
            border_radius: 12,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let theme = ThemeConfig::default();
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("theme.primary", theme.primary)?
            .set_default("theme.secondary", theme.secondary)?
            .set_default("theme.background", theme.background)?
            .set_default("theme.font_family", theme.font_family)?
            .set_default("theme.border_radius", i64::from(theme.border_radius))?;

        // An explicit file must exist; the cwd fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Priority: CLI flag > CLI env var > PETSTORE_* > config file > defaults.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("server.static_dir", dir)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
