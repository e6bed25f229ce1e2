//! Placeholder session client that accepts every submission.
//!
//! Stands in for the real authority until one exists. It logs the attempt (never the
//! credentials or the visitor's name) and hands back a profile built from the submitted
//! fields.

use crate::auth::{AuthClient, AuthError, LoginRequest, RegisterRequest};
use crate::UserInfo;

/// Provider tag on profiles issued by [`LocalAuthClient`].
pub const LOCAL_PROVIDER: &str = "local";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalAuthClient;

impl LocalAuthClient {
    pub fn new() -> Self {
        Self
    }

    fn profile(email: &str, name: Option<String>) -> UserInfo {
        let email = email.trim().to_lowercase();
        UserInfo {
            id: format!("{LOCAL_PROVIDER}:{email}"),
            email,
            name,
            avatar_url: None,
            provider: LOCAL_PROVIDER.to_string(),
        }
    }
}

impl AuthClient for LocalAuthClient {
    async fn login(&self, request: LoginRequest) -> Result<UserInfo, AuthError> {
        tracing::info!(provider = LOCAL_PROVIDER, "login accepted");
        Ok(Self::profile(&request.email, None))
    }

    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AuthError> {
        tracing::info!(provider = LOCAL_PROVIDER, "registration accepted");
        let name = Some(request.name.trim().to_string()).filter(|n| !n.is_empty());
        Ok(Self::profile(&request.email, name))
    }
}
