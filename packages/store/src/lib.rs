pub mod config;
pub mod state;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use config::{SiteConfig, StorageScope};
pub use state::{UiState, UiStateStore, UserMode, USER_MODE_KEY};

/// Errors raised by UI state backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage lock poisoned")]
    Poisoned,
}
