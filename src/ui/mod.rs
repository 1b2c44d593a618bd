//! UI components and layouts.
//!
//! Leptos components rendered to HTML on the server. No client bundle is
//! shipped; interactivity is links plus the CSS-driven drawer.
//!
//! # Structure
//!
//! - [`app`]: Document, shell layout and route outlet
//! - [`shell`]: App bar, drawer, floating button, footer
//! - [`pages`]: Routed pages
//! - [`components`]: Reusable themed components

pub mod app;
pub mod components;
pub mod pages;
pub mod shell;

pub use app::{ShellContext, render_page};
