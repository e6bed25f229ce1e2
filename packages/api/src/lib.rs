//! # API crate — the session boundary for the AspireMap pages
//!
//! The pages collect credentials; something else decides whether they are good. This
//! crate is where that "something else" plugs in.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthClient`] trait, request types, [`AuthError`], and the [`LocalAuthClient`] placeholder |
//! | [`models`] | [`UserInfo`], the client-safe user profile |

pub mod auth;
pub mod models;

pub use auth::{AuthClient, AuthError, LocalAuthClient, LoginRequest, RegisterRequest};
pub use models::UserInfo;
