//! Combined login / register / guest page.
//!
//! Holds one [`AuthView`] signal; the three panels read and write it. Submissions go
//! through the flows in [`crate::auth_flow`], so the page itself only wires events.

use dioxus::prelude::*;
use store::SiteConfig;

use crate::auth::{use_auth, use_ui_state, SessionClient};
use crate::auth_flow::{
    continue_as_guest, submit_login, submit_register, AuthField, AuthTab, AuthView,
};
use crate::backdrop::Backdrop;
use crate::content::{GUEST_LIMITATIONS, SOCIAL_PROVIDERS};
use crate::navigation::Destination;
use crate::theme::{DisplayMode, DisplayModeSignal, DisplayModeToggle};
use crate::Navbar;

const FLOATING_ITEMS: usize = 15;

#[component]
pub fn AuthPageView(on_navigate: EventHandler<Destination>) -> Element {
    let mut view = use_signal(AuthView::new);
    let mode: DisplayModeSignal = use_signal(DisplayMode::default);
    let mut auth = use_auth();
    let ui_state = use_ui_state();
    let client = use_context::<SessionClient>();
    let config = use_context::<SiteConfig>();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = view.write().begin_submit();
        spawn(async move {
            let result = submit_login(&client, &on_navigate, &form).await;
            if let Ok(user) = &result {
                auth.write().user = Some(user.clone());
            }
            // The page may already be unmounting after a successful navigation.
            if let Ok(mut v) = view.try_write() {
                v.finish(&result);
            }
        });
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = view.write().begin_submit();
        spawn(async move {
            let result = submit_register(&client, &on_navigate, &form).await;
            if let Ok(user) = &result {
                auth.write().user = Some(user.clone());
            }
            if let Ok(mut v) = view.try_write() {
                v.finish(&result);
            }
        });
    };

    let handle_guest = move |_: ()| {
        auth.write().guest = true;
        continue_as_guest(&ui_state, &on_navigate);
    };

    let tab = view().tab;

    rsx! {
        div {
            class: "page auth-page {mode().class()}",

            Backdrop { count: FLOATING_ITEMS }

            Navbar {
                button {
                    class: "nav-button",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(Destination::Home),
                    span { "⏭️" }
                    "Skip"
                }
                DisplayModeToggle { mode: mode }
            }

            main {
                class: "auth-content",

                div {
                    class: "auth-brand",
                    h1 {
                        span {
                            class: "brand clickable",
                            onclick: move |_| on_navigate.call(Destination::Home),
                            "{config.brand.name}"
                        }
                    }
                    p { class: "tagline", "{config.brand.tagline}" }
                }

                div {
                    class: "auth-tabs",
                    role: "tablist",
                    for t in AuthTab::ALL {
                        button {
                            key: "{t.id()}",
                            class: if t == tab { "auth-tab active" } else { "auth-tab" },
                            r#type: "button",
                            role: "tab",
                            aria_selected: if t == tab { "true" } else { "false" },
                            onclick: move |_| view.write().select_tab(t),
                            span { "{t.icon()}" }
                            "{t.label()}"
                        }
                    }
                }

                {match tab {
                    AuthTab::Login => rsx! {
                        LoginPanel { view: view, on_submit: handle_login }
                    },
                    AuthTab::Register => rsx! {
                        RegisterPanel { view: view, on_submit: handle_register }
                    },
                    AuthTab::Guest => rsx! {
                        GuestPanel { view: view, on_continue: handle_guest }
                    },
                }}

                if tab.shows_social_login() {
                    SocialLogin {}
                }

                div {
                    class: "back-home",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(Destination::Home),
                        span { "←" }
                        "Back to Home"
                    }
                }
            }
        }
    }
}

#[component]
fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(err) = message {
            div { class: "form-error", role: "alert", "{err}" }
        }
    }
}

#[component]
fn LoginPanel(view: Signal<AuthView>, on_submit: EventHandler<FormEvent>) -> Element {
    let mut view = view;
    let state = view();

    rsx! {
        div {
            class: "auth-card",
            h2 { "Welcome Back! 👋" }
            ErrorBanner { message: state.error.clone() }
            form {
                onsubmit: move |evt| on_submit.call(evt),

                div {
                    class: "form-field",
                    label { r#for: "login-email", "Email Address" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "📧" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            name: AuthField::Email.name(),
                            required: true,
                            placeholder: "hello@example.com",
                            value: state.form.email.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::Email, evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "🔒" }
                        input {
                            id: "login-password",
                            r#type: if state.show_password { "text" } else { "password" },
                            name: AuthField::Password.name(),
                            required: true,
                            placeholder: "••••••••",
                            value: state.form.password.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::Password, evt.value()),
                        }
                        button {
                            class: "reveal",
                            r#type: "button",
                            title: if state.show_password { "Hide password" } else { "Show password" },
                            onclick: move |_| view.write().toggle_password_visibility(),
                            if state.show_password { "👁️" } else { "👁️‍🗨️" }
                        }
                    }
                }

                div {
                    class: "form-row",
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: state.remember_me,
                            onchange: move |evt: FormEvent| view.write().remember_me = evt.checked(),
                        }
                        span { "Remember me" }
                    }
                    button { class: "link-button", r#type: "button", "Forgot password?" }
                }

                button {
                    class: "primary-button wide",
                    r#type: "submit",
                    disabled: state.pending,
                    span { "🔐" }
                    if state.pending { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "switch-tab",
                "Don't have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| view.write().select_tab(AuthTab::Register),
                    "Register here"
                }
            }
        }
    }
}

#[component]
fn RegisterPanel(view: Signal<AuthView>, on_submit: EventHandler<FormEvent>) -> Element {
    let mut view = view;
    let state = view();

    rsx! {
        div {
            class: "auth-card",
            h2 { "Create Account ✨" }
            ErrorBanner { message: state.error.clone() }
            form {
                onsubmit: move |evt| on_submit.call(evt),

                div {
                    class: "form-field",
                    label { r#for: "register-name", "Full Name" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "👤" }
                        input {
                            id: "register-name",
                            r#type: "text",
                            name: AuthField::Name.name(),
                            required: true,
                            placeholder: "John Doe",
                            value: state.form.name.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::Name, evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-email", "Email Address" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "📧" }
                        input {
                            id: "register-email",
                            r#type: "email",
                            name: AuthField::Email.name(),
                            required: true,
                            placeholder: "hello@example.com",
                            value: state.form.email.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::Email, evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-password", "Password" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "🔒" }
                        input {
                            id: "register-password",
                            r#type: "password",
                            name: AuthField::Password.name(),
                            required: true,
                            placeholder: "••••••••",
                            value: state.form.password.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::Password, evt.value()),
                        }
                    }
                    p { class: "form-help", "Minimum 8 characters" }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-confirm", "Confirm Password" }
                    div {
                        class: "input-wrap",
                        span { class: "input-icon", "🔐" }
                        input {
                            id: "register-confirm",
                            r#type: "password",
                            name: AuthField::ConfirmPassword.name(),
                            required: true,
                            placeholder: "••••••••",
                            value: state.form.confirm_password.clone(),
                            oninput: move |evt: FormEvent| view.write().update_field(AuthField::ConfirmPassword, evt.value()),
                        }
                    }
                }

                div {
                    class: "form-row",
                    label {
                        class: "checkbox",
                        input {
                            id: "terms",
                            r#type: "checkbox",
                            required: true,
                            checked: state.accepted_terms,
                            onchange: move |evt: FormEvent| view.write().accepted_terms = evt.checked(),
                        }
                        span {
                            "I agree to the "
                            button { class: "link-button", r#type: "button", "Terms & Conditions" }
                        }
                    }
                }

                button {
                    class: "primary-button wide",
                    r#type: "submit",
                    disabled: state.pending,
                    span { "📝" }
                    if state.pending { "Creating account..." } else { "Create Account" }
                }
            }

            p {
                class: "switch-tab",
                "Already have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| view.write().select_tab(AuthTab::Login),
                    "Sign in"
                }
            }
        }
    }
}

#[component]
fn GuestPanel(view: Signal<AuthView>, on_continue: EventHandler<()>) -> Element {
    let mut view = view;

    rsx! {
        div {
            class: "auth-card guest",
            h2 { "Continue as Guest" }
            p {
                class: "guest-text",
                "Explore career paths and features without creating an account. Your progress won't be saved."
            }
            div {
                class: "guest-actions",
                button {
                    class: "primary-button wide",
                    r#type: "button",
                    onclick: move |_| on_continue.call(()),
                    span { "🚀" }
                    "Continue as Guest"
                }
                button {
                    class: "secondary-button wide",
                    r#type: "button",
                    onclick: move |_| view.write().select_tab(AuthTab::Register),
                    "Create Account"
                }
            }
            div {
                class: "guest-limits",
                p { "Guest mode limitations:" }
                div {
                    class: "limit-tags",
                    for limit in GUEST_LIMITATIONS {
                        span { key: "{limit}", class: "limit-tag", "{limit}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialLogin() -> Element {
    rsx! {
        div {
            class: "social-login",
            div {
                class: "divider",
                span { "Or continue with" }
            }
            div {
                class: "social-buttons",
                for provider in SOCIAL_PROVIDERS {
                    button {
                        key: "{provider.label}",
                        class: "social-button {provider.class}",
                        r#type: "button",
                        title: "{provider.label}",
                        span { class: "social-mark", "{provider.icon}" }
                        "{provider.label}"
                    }
                }
            }
        }
    }
}
