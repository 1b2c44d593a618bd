//! Reusable themed UI components.
//!
//! Styling comes from the classes defined in
//! [`Theme::stylesheet`](crate::theme::Theme::stylesheet).
//!
//! # Components
//!
//! - [`LinkButton`]: Anchor styled as a button
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`icons`]: SVG icon components

mod button;
mod card;
pub mod icons;

pub use button::{ButtonVariant, LinkButton};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
