//! Route table and navigation links.
//!
//! The path patterns here are what the axum router registers; [`AppRoute`] is
//! what the matched handler hands to the UI.

use std::sync::LazyLock;

use url::Url;

pub const HOME_PATH: &str = "/";
pub const PET_DETAIL_PATH: &str = "/pets/{id}";
pub const ADD_PET_PATH: &str = "/add";
pub const EDIT_PET_PATH: &str = "/edit/{id}";

/// Site name shown in the app bar, titles and footer.
pub const SITE_NAME: &str = "PetStore";

static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("static base URL parses"));

/// A resolved page route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    PetDetail { id: String },
    AddPet,
    EditPet { id: String },
    /// No route matched; carries the requested path.
    NotFound { path: String },
}

impl AppRoute {
    /// Link target for this route. Ids are encoded as a single path segment.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_string(),
            Self::PetDetail { id } => segment_path(&["pets", id]),
            Self::AddPet => ADD_PET_PATH.to_string(),
            Self::EditPet { id } => segment_path(&["edit", id]),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Document title.
    #[must_use]
    pub fn title(&self) -> String {
        let page = match self {
            Self::Home => return SITE_NAME.to_string(),
            Self::PetDetail { id } => format!("Pet {id}"),
            Self::AddPet => "Add New Pet".to_string(),
            Self::EditPet { id } => format!("Edit Pet {id}"),
            Self::NotFound { .. } => "Page Not Found".to_string(),
        };
        format!("{page} - {SITE_NAME}")
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn segment_path(segments: &[&str]) -> String {
    let mut url = BASE_URL.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// Entry in the app bar and drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub text: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// Whether this link points at the page being rendered.
    #[must_use]
    pub fn is_active(&self, route: &AppRoute) -> bool {
        match route {
            AppRoute::Home => self.path == HOME_PATH,
            AppRoute::AddPet => self.path == ADD_PET_PATH,
            _ => false,
        }
    }
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        text: "Home",
        path: HOME_PATH,
    },
    NavLink {
        text: "Add New Pet",
        path: ADD_PET_PATH,
    },
];
