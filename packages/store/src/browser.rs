//! # Web Storage backend — browser-side persistence
//!
//! [`BrowserStore`] is the [`UiStateStore`] implementation used on the **web platform**.
//! It writes through to `window.localStorage` or `window.sessionStorage`, chosen by
//! [`StorageScope`].
//!
//! ## Connection management
//!
//! `BrowserStore` only remembers the scope. The `Storage` handle is looked up on every
//! operation because `web_sys::Storage` is not `Send`, and the lookup is a cheap
//! property read on `window`.
//!
//! ## Error handling
//!
//! Storage can be missing (no `window`, sandboxed iframes) or refuse writes (quota,
//! private browsing). Both surface as [`StoreError::Unavailable`] / [`StoreError::Backend`]
//! so callers decide whether to degrade.

use crate::config::StorageScope;
use crate::state::UiStateStore;
use crate::StoreError;

/// Web Storage-backed UiStateStore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStore {
    scope: StorageScope,
}

impl BrowserStore {
    pub fn with_scope(scope: StorageScope) -> Self {
        Self { scope }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable("no window"))?;
        let storage = match self.scope {
            StorageScope::Local => window.local_storage(),
            StorageScope::Session => window.session_storage(),
        };
        storage
            .map_err(|e| StoreError::Backend(format!("{e:?}")))?
            .ok_or(StoreError::Unavailable(self.scope.as_str()))
    }
}

impl UiStateStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}
