//! # Session client — the seam between the pages and whatever issues sessions
//!
//! The pages never talk to a server directly. They hand a [`LoginRequest`] or a
//! [`RegisterRequest`] to an [`AuthClient`] and act on the result:
//!
//! - `Ok(UserInfo)`: the session exists, the caller navigates on.
//! - `Err(AuthError)`: the caller stays put and may show the message.
//!
//! The trait is async because any real implementation will cross the network, even
//! though the bundled [`LocalAuthClient`](super::LocalAuthClient) resolves immediately.
//! Requests own their strings so the returned futures borrow nothing but `self`.

use std::fmt;
use std::future::Future;

use crate::UserInfo;

/// Credentials submitted from the login panel.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Details submitted from the register panel.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Failure reported by a session client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The authority answered and said no (wrong password, duplicate account, ...).
    #[error("{0}")]
    Rejected(String),
    /// The authority could not be reached.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Async interface to the external session authority.
pub trait AuthClient {
    fn login(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = Result<UserInfo, AuthError>>;
    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<UserInfo, AuthError>>;
}
