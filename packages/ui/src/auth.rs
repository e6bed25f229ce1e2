//! Session context and platform handles for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use store::{StorageScope, UiState};

/// Who is using the app right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// The visitor picked "Continue as Guest" (here or in an earlier visit).
    pub guest: bool,
}

/// Session client the pages submit to.
pub type SessionClient = api::LocalAuthClient;

/// UI state store for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the platform UI state store.
///
/// - **Web** (WASM + `web` feature): Web Storage in the configured scope
/// - **Native**: an in-memory map
pub fn make_ui_state(scope: StorageScope) -> UiState<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        UiState::new(store::BrowserStore::with_scope(scope))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = scope;
        UiState::new(store::MemoryStore::new())
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared UI state store.
pub fn use_ui_state() -> UiState<PlatformStore> {
    use_context::<UiState<PlatformStore>>()
}

/// Provider component that manages authentication state.
///
/// Expects a `UiState<PlatformStore>` context from an ancestor; the guest marker is
/// read from it once on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let ui_state = use_ui_state();
    let auth_state = use_signal(move || {
        let guest = match ui_state.is_guest() {
            Ok(guest) => guest,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read user mode");
                false
            }
        };
        AuthState { user: None, guest }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
