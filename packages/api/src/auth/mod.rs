//! Authentication boundary: the session client trait and its local implementation.

mod client;
mod local;

pub use client::{AuthClient, AuthError, LoginRequest, RegisterRequest};
pub use local::LocalAuthClient;
