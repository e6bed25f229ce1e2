//! # Site configuration — `site.toml`
//!
//! Defines the TOML file bundled with the web build (filename:
//! [`SiteConfig::filename`] = `"site.toml"`). It carries the handful of values the
//! pages print verbatim plus the knobs for storage scope and log level.
//!
//! ## Structure
//!
//! ```toml
//! [brand]
//! name = "AspireMap"
//! tagline = "Brew your career success story ☕"
//!
//! [contact]
//! email = "hello@aspiremap.com"
//! subject = "Career Guidance Inquiry"
//! phone = "+91 98765 43210"
//!
//! [storage]
//! scope = "local"     # or "session"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and key has a default, so a missing or empty file is equivalent to
//! [`SiteConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Names and lines printed in headers and the footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub copyright: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "AspireMap".to_string(),
            tagline: "Brew your career success story ☕".to_string(),
            about: "Brewing career success with AI-powered guidance and personalized roadmaps."
                .to_string(),
            copyright: "© 2026 AspireMap. Brewing careers with passion ☕".to_string(),
        }
    }
}

/// Footer contact details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub subject: String,
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@aspiremap.com".to_string(),
            subject: "Career Guidance Inquiry".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }
}

impl ContactConfig {
    /// `mailto:` link with the subject pre-filled and percent-encoded.
    pub fn mailto(&self) -> String {
        if self.subject.is_empty() {
            return format!("mailto:{}", self.email);
        }
        format!(
            "mailto:{}?subject={}",
            self.email,
            urlencoding::encode(&self.subject)
        )
    }
}

/// Which browser storage area holds UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    /// `localStorage`: survives tab and browser restarts.
    #[default]
    Local,
    /// `sessionStorage`: cleared when the tab closes.
    Session,
}

impl StorageScope {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageScope::Local => "localStorage",
            StorageScope::Session => "sessionStorage",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub scope: StorageScope,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.brand.name, "AspireMap");
        assert_eq!(config.storage.scope, StorageScope::Local);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [contact]
            phone = "+1 555 0100"

            [storage]
            scope = "session"
            "#,
        )
        .unwrap();
        assert_eq!(config.contact.phone, "+1 555 0100");
        assert_eq!(config.contact.email, "hello@aspiremap.com");
        assert_eq!(config.storage.scope, StorageScope::Session);
        assert_eq!(config.brand, BrandConfig::default());
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        assert!(SiteConfig::from_toml("[storage]\nscope = \"cookie\"").is_err());
    }

    #[test]
    fn test_mailto_encodes_subject() {
        let contact = ContactConfig::default();
        assert_eq!(
            contact.mailto(),
            "mailto:hello@aspiremap.com?subject=Career%20Guidance%20Inquiry"
        );

        let bare = ContactConfig {
            subject: String::new(),
            ..ContactConfig::default()
        };
        assert_eq!(bare.mailto(), "mailto:hello@aspiremap.com");
    }

    #[test]
    fn test_mailto_encodes_reserved_characters() {
        let contact = ContactConfig {
            subject: "Q&A #3: 100% free? a=b".to_string(),
            ..ContactConfig::default()
        };
        assert_eq!(
            contact.mailto(),
            "mailto:hello@aspiremap.com?subject=Q%26A%20%233%3A%20100%25%20free%3F%20a%3Db"
        );
    }
}
