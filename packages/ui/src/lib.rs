//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod auth_flow;
pub use auth_flow::{AuthField, AuthFlowError, AuthForm, AuthTab, AuthView};

pub mod content;

pub mod navigation;
pub use navigation::{Destination, Navigation};

pub mod views;

pub const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

mod auth;
pub use auth::{
    make_ui_state, use_auth, use_ui_state, AuthProvider, AuthState, PlatformStore, SessionClient,
};

mod backdrop;
pub use backdrop::Backdrop;

mod navbar;
pub use navbar::Navbar;

mod theme;
pub use theme::{DisplayMode, DisplayModeSignal, DisplayModeToggle};
