//! # UI state — small string-keyed values that outlive a single view
//!
//! The pages keep almost everything in view-local signals. The one exception is the
//! user mode marker: choosing "Continue as Guest" records `userMode = guest` so that
//! the rest of the product can tell an anonymous visitor apart from a signed-in user.
//!
//! ## [`UiStateStore`] trait
//!
//! A synchronous key/value interface (`get` / `set`) over string keys and
//! string values. Implementations live in sibling modules ([`crate::memory`] and, on
//! the web, [`crate::browser`]).
//!
//! ## [`UiState`]
//!
//! Typed accessors on top of any store. Callers never touch raw keys:
//!
//! | Method | Key | Value |
//! |--------|-----|-------|
//! | [`user_mode`](UiState::user_mode) | `userMode` | parsed into [`UserMode`] |
//! | [`set_user_mode`](UiState::set_user_mode) | `userMode` | [`UserMode::as_str`] |
//! | [`is_guest`](UiState::is_guest) | `userMode` | `== guest` |

use crate::StoreError;

/// Key under which the user mode marker is persisted.
pub const USER_MODE_KEY: &str = "userMode";

/// Synchronous string key/value storage for UI state.
pub trait UiStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: UiStateStore + ?Sized> UiStateStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// How the visitor chose to use the product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMode {
    Guest,
}

impl UserMode {
    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            UserMode::Guest => "guest",
        }
    }

    /// Parse a stored value. Unknown values are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "guest" => Some(UserMode::Guest),
            _ => None,
        }
    }
}

/// Typed view over a [`UiStateStore`].
#[derive(Clone, Debug, Default)]
pub struct UiState<S> {
    store: S,
}

impl<S: UiStateStore> UiState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current user mode, if one has been recorded.
    pub fn user_mode(&self) -> Result<Option<UserMode>, StoreError> {
        Ok(self
            .store
            .get(USER_MODE_KEY)?
            .as_deref()
            .and_then(UserMode::parse))
    }

    pub fn set_user_mode(&self, mode: UserMode) -> Result<(), StoreError> {
        self.store.set(USER_MODE_KEY, mode.as_str())
    }

    /// Whether the guest marker is present.
    pub fn is_guest(&self) -> Result<bool, StoreError> {
        Ok(self.user_mode()? == Some(UserMode::Guest))
    }
}
