//! Error types for the shell.

use thiserror::Error;

/// Errors raised while building a [`Theme`](crate::theme::Theme) from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A palette entry is not `#rgb` or `#rrggbb`.
    #[error("invalid color for theme.{field}: {value:?} (expected #rgb or #rrggbb)")]
    InvalidColor {
        /// Config key the value came from.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The font family would break out of the CSS declaration it is written into.
    #[error("invalid theme.font_family: {0:?}")]
    InvalidFontFamily(String),
}

/// Top-level startup error.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Config sources could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configured theme values are invalid.
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
