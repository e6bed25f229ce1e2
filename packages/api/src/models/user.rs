//! # User profile returned by the session collaborator
//!
//! [`UserInfo`] is the client-safe projection of an account: no password, no
//! timestamps, identifiers as plain strings so it serializes the same in WASM and
//! native builds. [`UserInfo::display_name`] returns the name or falls back to the
//! email address; [`UserInfo::initial`] gives the single letter used for avatars.

use serde::{Deserialize, Serialize};

/// User information safe to keep in the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Uppercased first character of the display name.
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "local:a@b.com".to_string(),
            email: "a@b.com".to_string(),
            name: name.map(str::to_string),
            avatar_url: None,
            provider: "local".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(user(Some("Priya Sharma")).display_name(), "Priya Sharma");
        assert_eq!(user(Some("Priya Sharma")).initial(), Some('P'));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(None).display_name(), "a@b.com");
        assert_eq!(user(Some("   ")).display_name(), "a@b.com");
        assert_eq!(user(None).initial(), Some('A'));
    }
}
