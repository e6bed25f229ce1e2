//! # Auth view controller — tabs, form fields, and where submissions go
//!
//! The login page shows exactly one of three panels, picked by [`AuthTab`]. The
//! fields of all three panels share one [`AuthForm`], so switching tabs keeps what
//! was typed. [`AuthView`] bundles both with the transient UI flags (error banner,
//! pending submit, password visibility).
//!
//! ## Submissions
//!
//! | Function | Check | Collaborator | On success |
//! |----------|-------|--------------|------------|
//! | [`submit_login`] | none (fields are `required` in the markup) | [`AuthClient::login`] | [`Destination::Dashboard`] |
//! | [`submit_register`] | password == confirm password | [`AuthClient::register`] | [`Destination::Assessment`] |
//! | [`continue_as_guest`] | none | writes `userMode = guest` | [`Destination::Explore`] |
//!
//! A failed submission never navigates and never touches the active tab. The caller
//! feeds the result to [`AuthView::finish`], which shows the message inline.

use api::{AuthClient, AuthError, LoginRequest, RegisterRequest, UserInfo};
use store::{UiState, UiStateStore, UserMode};

use crate::navigation::{Destination, Navigation};

/// The three mutually exclusive panels of the auth page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
    Guest,
}

impl AuthTab {
    pub const ALL: [AuthTab; 3] = [AuthTab::Login, AuthTab::Register, AuthTab::Guest];

    pub fn id(self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Register => "register",
            AuthTab::Guest => "guest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Register => "Register",
            AuthTab::Guest => "Guest",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AuthTab::Login => "🔐",
            AuthTab::Register => "📝",
            AuthTab::Guest => "👤",
        }
    }

    /// Social provider buttons only make sense when there is an account to sign into.
    pub fn shows_social_login(self) -> bool {
        !matches!(self, AuthTab::Guest)
    }
}

/// A text field of the auth form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    ConfirmPassword,
    Name,
}

impl AuthField {
    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirmPassword",
            AuthField::Name => "name",
        }
    }
}

/// Field values shared by the login and register panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

impl AuthForm {
    /// Overwrite one field. No validation happens here.
    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
            AuthField::Name => self.name = value,
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn register_request(&self) -> Result<RegisterRequest, AuthFlowError> {
        if !self.passwords_match() {
            return Err(AuthFlowError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFlowError {
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error(transparent)]
    Session(#[from] AuthError),
}

/// Everything the auth page keeps between events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthView {
    pub tab: AuthTab,
    pub form: AuthForm,
    pub error: Option<String>,
    pub pending: bool,
    pub show_password: bool,
    pub remember_me: bool,
    pub accepted_terms: bool,
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show another panel. Always succeeds; a stale error banner is dropped.
    pub fn select_tab(&mut self, tab: AuthTab) {
        tracing::debug!(tab = tab.id(), "select tab");
        self.tab = tab;
        self.error = None;
    }

    pub fn update_field(&mut self, field: AuthField, value: String) {
        self.form.set(field, value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Mark a submission in flight and hand back the form to submit.
    pub fn begin_submit(&mut self) -> AuthForm {
        self.pending = true;
        self.error = None;
        self.form.clone()
    }

    /// Record how a submission ended.
    pub fn finish<T>(&mut self, result: &Result<T, AuthFlowError>) {
        self.pending = false;
        self.error = result.as_ref().err().map(ToString::to_string);
    }
}

/// Forward the login fields to the session client, then go to the dashboard.
pub async fn submit_login<C, N>(
    client: &C,
    nav: &N,
    form: &AuthForm,
) -> Result<UserInfo, AuthFlowError>
where
    C: AuthClient,
    N: Navigation,
{
    let user = client.login(form.login_request()).await.map_err(|e| {
        tracing::warn!(error = %e, "login failed");
        e
    })?;
    nav.navigate(Destination::Dashboard);
    Ok(user)
}

/// Check the password confirmation, register, then go to the assessment.
pub async fn submit_register<C, N>(
    client: &C,
    nav: &N,
    form: &AuthForm,
) -> Result<UserInfo, AuthFlowError>
where
    C: AuthClient,
    N: Navigation,
{
    let request = form.register_request()?;
    let user = client.register(request).await.map_err(|e| {
        tracing::warn!(error = %e, "registration failed");
        e
    })?;
    nav.navigate(Destination::Assessment);
    Ok(user)
}

/// Record the guest marker and go exploring.
///
/// Navigation happens even when the marker cannot be written.
pub fn continue_as_guest<S, N>(state: &UiState<S>, nav: &N)
where
    S: UiStateStore,
    N: Navigation,
{
    match state.set_user_mode(UserMode::Guest) {
        Ok(()) => tracing::info!("guest mode enabled"),
        Err(e) => tracing::warn!(error = %e, "failed to persist guest mode"),
    }
    nav.navigate(Destination::Explore);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use store::{MemoryStore, StoreError, USER_MODE_KEY};

    #[derive(Default)]
    struct RecordingClient {
        logins: RefCell<Vec<LoginRequest>>,
        registrations: RefCell<Vec<RegisterRequest>>,
        fail_with: Option<AuthError>,
    }

    impl RecordingClient {
        fn failing(error: AuthError) -> Self {
            Self {
                fail_with: Some(error),
                ..Self::default()
            }
        }

        fn user(email: &str) -> UserInfo {
            UserInfo {
                id: format!("test:{email}"),
                email: email.to_string(),
                name: None,
                avatar_url: None,
                provider: "test".to_string(),
            }
        }
    }

    impl AuthClient for RecordingClient {
        async fn login(&self, request: LoginRequest) -> Result<UserInfo, AuthError> {
            let email = request.email.clone();
            self.logins.borrow_mut().push(request);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(Self::user(&email)),
            }
        }

        async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AuthError> {
            let email = request.email.clone();
            self.registrations.borrow_mut().push(request);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(Self::user(&email)),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNav {
        visited: RefCell<Vec<Destination>>,
    }

    impl Navigation for RecordingNav {
        fn navigate(&self, destination: Destination) {
            self.visited.borrow_mut().push(destination);
        }
    }

    /// Counts writes per key so "exactly once" can be asserted.
    #[derive(Default)]
    struct CountingStore {
        values: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
        broken: bool,
    }

    impl UiStateStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            *self.writes.borrow_mut() += 1;
            if self.broken {
                return Err(StoreError::Unavailable("localStorage"));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn view_with(tab: AuthTab, fields: &[(AuthField, &str)]) -> AuthView {
        let mut view = AuthView::new();
        view.select_tab(tab);
        for (field, value) in fields {
            view.update_field(*field, value.to_string());
        }
        view
    }

    #[test]
    fn test_initial_state() {
        let view = AuthView::new();
        assert_eq!(view.tab, AuthTab::Login);
        assert_eq!(view.form, AuthForm::default());
        assert!(view.form.email.is_empty());
        assert!(view.error.is_none());
        assert!(!view.pending);
    }

    #[test]
    fn test_last_selected_tab_wins() {
        let sequences: [&[AuthTab]; 4] = [
            &[AuthTab::Register],
            &[AuthTab::Guest, AuthTab::Login],
            &[AuthTab::Register, AuthTab::Register, AuthTab::Guest],
            &[AuthTab::Guest, AuthTab::Register, AuthTab::Login, AuthTab::Guest],
        ];
        for sequence in sequences {
            let mut view = AuthView::new();
            for tab in sequence {
                view.select_tab(*tab);
            }
            assert_eq!(Some(&view.tab), sequence.last());
        }
    }

    #[test]
    fn test_select_tab_clears_error() {
        let mut view = AuthView::new();
        view.error = Some("Passwords don't match!".to_string());
        view.select_tab(AuthTab::Login);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_update_field_sets_only_that_field() {
        let mut view = AuthView::new();
        view.update_field(AuthField::ConfirmPassword, "xyz999".to_string());
        assert_eq!(view.form.confirm_password, "xyz999");
        assert_eq!(view.form.password, "");

        // Fields survive tab changes
        view.select_tab(AuthTab::Guest);
        view.select_tab(AuthTab::Register);
        assert_eq!(view.form.confirm_password, "xyz999");
    }

    #[test]
    fn test_field_names_match_inputs() {
        assert_eq!(AuthField::ConfirmPassword.name(), "confirmPassword");
        assert_eq!(AuthField::Email.name(), "email");
    }

    #[test]
    fn test_social_login_hidden_for_guest() {
        assert!(AuthTab::Login.shows_social_login());
        assert!(AuthTab::Register.shows_social_login());
        assert!(!AuthTab::Guest.shows_social_login());
    }

    #[tokio::test]
    async fn test_login_forwards_credentials_then_dashboard() {
        let client = RecordingClient::default();
        let nav = RecordingNav::default();
        let mut view = view_with(
            AuthTab::Login,
            &[(AuthField::Email, "a@b.com"), (AuthField::Password, "secret")],
        );

        let form = view.begin_submit();
        assert!(view.pending);
        let result = submit_login(&client, &nav, &form).await;
        view.finish(&result);

        assert_eq!(result.unwrap().email, "a@b.com");
        let logins = client.logins.borrow();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].email, "a@b.com");
        assert_eq!(logins[0].password, "secret");
        assert_eq!(*nav.visited.borrow(), vec![Destination::Dashboard]);
        assert!(!view.pending);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_stays_put() {
        let client = RecordingClient::failing(AuthError::Rejected("Invalid credentials".into()));
        let nav = RecordingNav::default();
        let mut view = view_with(
            AuthTab::Login,
            &[(AuthField::Email, "a@b.com"), (AuthField::Password, "wrong")],
        );

        let form = view.begin_submit();
        let result = submit_login(&client, &nav, &form).await;
        view.finish(&result);

        assert_eq!(
            result.unwrap_err(),
            AuthFlowError::Session(AuthError::Rejected("Invalid credentials".into()))
        );
        assert!(nav.visited.borrow().is_empty());
        assert_eq!(view.tab, AuthTab::Login);
        assert_eq!(view.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(view.form.password, "wrong");
    }

    #[tokio::test]
    async fn test_register_mismatch_blocks_submission() {
        let client = RecordingClient::default();
        let nav = RecordingNav::default();
        let mut view = view_with(
            AuthTab::Register,
            &[
                (AuthField::Password, "abc123"),
                (AuthField::ConfirmPassword, "xyz999"),
            ],
        );
        let before = view.form.clone();

        let form = view.begin_submit();
        let result = submit_register(&client, &nav, &form).await;
        view.finish(&result);

        assert_eq!(result.unwrap_err(), AuthFlowError::PasswordMismatch);
        assert!(client.registrations.borrow().is_empty());
        assert!(nav.visited.borrow().is_empty());
        assert_eq!(view.tab, AuthTab::Register);
        assert_eq!(view.form, before);
        assert_eq!(view.error.as_deref(), Some("Passwords don't match!"));
    }

    #[tokio::test]
    async fn test_register_forwards_current_values_once() {
        let client = RecordingClient::default();
        let nav = RecordingNav::default();
        let view = view_with(
            AuthTab::Register,
            &[
                (AuthField::Name, "Ananya Patel"),
                (AuthField::Email, "ananya@example.com"),
                (AuthField::Password, "abc123"),
                (AuthField::ConfirmPassword, "abc123"),
            ],
        );

        submit_register(&client, &nav, &view.form).await.unwrap();

        let registrations = client.registrations.borrow();
        assert_eq!(registrations.len(), 1);
        assert_eq!(
            registrations[0],
            RegisterRequest {
                name: "Ananya Patel".to_string(),
                email: "ananya@example.com".to_string(),
                password: "abc123".to_string(),
            }
        );
        assert!(client.logins.borrow().is_empty());
        assert_eq!(*nav.visited.borrow(), vec![Destination::Assessment]);
    }

    #[tokio::test]
    async fn test_register_with_empty_matching_passwords_still_forwards() {
        // Required-field enforcement belongs to the form markup, not this check.
        let client = RecordingClient::default();
        let nav = RecordingNav::default();
        submit_register(&client, &nav, &AuthForm::default())
            .await
            .unwrap();
        assert_eq!(client.registrations.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_register_failure_does_not_navigate() {
        let client = RecordingClient::failing(AuthError::Unavailable("offline".into()));
        let nav = RecordingNav::default();
        let mut view = view_with(
            AuthTab::Register,
            &[
                (AuthField::Password, "abc123"),
                (AuthField::ConfirmPassword, "abc123"),
            ],
        );

        let form = view.begin_submit();
        let result = submit_register(&client, &nav, &form).await;
        view.finish(&result);

        assert_eq!(client.registrations.borrow().len(), 1);
        assert!(nav.visited.borrow().is_empty());
        assert_eq!(view.tab, AuthTab::Register);
        assert_eq!(
            view.error.as_deref(),
            Some("authentication service unavailable: offline")
        );
    }

    #[test]
    fn test_guest_writes_marker_once_and_explores() {
        for prior in [None, Some("guest"), Some("member")] {
            let store = CountingStore::default();
            if let Some(value) = prior {
                store
                    .values
                    .borrow_mut()
                    .insert(USER_MODE_KEY.to_string(), value.to_string());
            }
            let state = UiState::new(&store);
            let nav = RecordingNav::default();

            continue_as_guest(&state, &nav);

            assert_eq!(*store.writes.borrow(), 1);
            assert_eq!(
                store.values.borrow().get(USER_MODE_KEY).map(String::as_str),
                Some("guest")
            );
            assert_eq!(*nav.visited.borrow(), vec![Destination::Explore]);
        }
    }

    #[test]
    fn test_guest_navigates_even_when_storage_fails() {
        let store = CountingStore {
            broken: true,
            ..CountingStore::default()
        };
        let nav = RecordingNav::default();

        continue_as_guest(&UiState::new(&store), &nav);

        assert_eq!(*store.writes.borrow(), 1);
        assert_eq!(*nav.visited.borrow(), vec![Destination::Explore]);
    }

    #[test]
    fn test_guest_marker_visible_through_memory_store() {
        let store = MemoryStore::new();
        let nav = RecordingNav::default();
        continue_as_guest(&UiState::new(store.clone()), &nav);
        assert!(UiState::new(store).is_guest().unwrap());
    }
}
