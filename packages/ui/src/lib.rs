//! This crate contains all shared UI for the workspace: the screens both
//! frontends render, the auth context, and the live-refresh plumbing.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod status;
pub use status::{use_status, Status, StatusBanner, StatusHandle, StatusKind};

mod confirm;
pub use confirm::ConfirmDelete;

mod live;
pub use live::{now_millis, use_collection_watch};

mod navbar;
pub use navbar::Navbar;

pub mod screens;
