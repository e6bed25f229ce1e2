//! Marketing landing page.

use dioxus::prelude::*;
use store::SiteConfig;

use crate::backdrop::Backdrop;
use crate::content::{
    Feature, Step, Testimonial, FEATURES, PROBLEMS, QUICK_LINKS, SOCIAL_ICONS, STATS, STEPS,
    SUBSCRIBE_THANKS, TESTIMONIALS,
};
use crate::navigation::Destination;
use crate::theme::{DisplayMode, DisplayModeSignal, DisplayModeToggle};
use crate::Navbar;

const FLOATING_ITEMS: usize = 20;

/// Footer newsletter form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
    pub notice: Option<&'static str>,
}

impl Subscription {
    /// Accept the typed address if there is one. Returns whether it was accepted.
    pub fn submit(&mut self) -> bool {
        if self.email.is_empty() {
            return false;
        }
        tracing::info!("newsletter subscription");
        self.email.clear();
        self.notice = Some(SUBSCRIBE_THANKS);
        true
    }
}

#[component]
pub fn LandingView(on_navigate: EventHandler<Destination>) -> Element {
    let mode: DisplayModeSignal = use_signal(DisplayMode::default);
    let config = use_context::<SiteConfig>();

    rsx! {
        div {
            class: "page landing {mode().class()}",

            Backdrop { count: FLOATING_ITEMS }

            Navbar {
                button {
                    class: "nav-button",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(Destination::Login),
                    span { "🔐" }
                    "Login"
                }
                DisplayModeToggle { mode: mode }
            }

            main {
                class: "page-content",
                Hero { brand: config.brand.name.clone(), on_navigate: on_navigate }
                ProblemSection {}
                FeatureGrid { features: FEATURES.to_vec() }
                HowItWorks { steps: STEPS.to_vec() }
                Testimonials { testimonials: TESTIMONIALS.to_vec() }
                CallToAction { on_navigate: on_navigate }
                SiteFooter { config: config.clone() }
            }
        }
    }
}

#[component]
fn Hero(brand: String, on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { class: "brand", "{brand}" }
            h2 {
                class: "hero-title",
                "Find the Right Career Path "
                br {}
                span { class: "accent", "with Confidence" }
            }
            p {
                class: "hero-subtitle",
                "AI-powered guidance, skill analysis & personalized roadmap for your dream career."
            }
            div {
                class: "hero-actions",
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(Destination::Assessment),
                    "🔵 Take Free Career Test"
                }
                button {
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(Destination::Explore),
                    "⚪ Explore Career Paths"
                }
            }
            div {
                class: "stats",
                for stat in STATS {
                    div {
                        key: "{stat.label}",
                        class: "card stat",
                        div { class: "stat-icon", "{stat.icon}" }
                        div { class: "stat-value", "{stat.value}" }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProblemSection() -> Element {
    rsx! {
        section {
            class: "problems panel",
            h2 { class: "section-title", "Confused About Your Career?" }
            div {
                class: "problem-grid",
                for problem in PROBLEMS {
                    div {
                        key: "{problem.text}",
                        class: "card problem",
                        span { class: "problem-icon", "{problem.icon}" }
                        p { "{problem.text}" }
                    }
                }
            }
            p { class: "problems-answer", "We simplify career decisions with data-driven insights. ☕" }
        }
    }
}

#[component]
fn FeatureGrid(features: Vec<Feature>) -> Element {
    rsx! {
        section {
            class: "features",
            h2 {
                class: "section-title",
                "Core Features to "
                span { class: "accent", "Elevate Your Career" }
            }
            div {
                class: "feature-grid",
                for (i, feature) in features.iter().enumerate() {
                    div {
                        key: "{feature.title}",
                        class: if i % 2 == 0 { "card feature feature-amber" } else { "card feature feature-yellow" },
                        span { class: "feature-icon", "{feature.icon}" }
                        h3 { "{feature.title}" }
                        p { "{feature.desc}" }
                    }
                }
            }
        }
    }
}

#[component]
fn HowItWorks(steps: Vec<Step>) -> Element {
    rsx! {
        section {
            class: "steps",
            h2 {
                class: "section-title",
                "Your Journey in "
                span { class: "accent", "3 Simple Steps" }
            }
            div {
                class: "step-grid",
                div { class: "step-line" }
                for step in steps.iter() {
                    div {
                        key: "{step.title}",
                        class: "card step",
                        div { class: "step-number", "{step.step}" }
                        div { class: "step-icon", "{step.icon}" }
                        h3 { "{step.title}" }
                        p { "{step.desc}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Testimonials(testimonials: Vec<Testimonial>) -> Element {
    rsx! {
        section {
            class: "testimonials",
            h2 { class: "section-title", "Success Stories ☕" }
            div {
                class: "testimonial-grid",
                for t in testimonials.iter() {
                    div {
                        key: "{t.name}",
                        class: "card testimonial",
                        div { class: "stars", "{t.stars()}" }
                        p { class: "quote", "\"{t.text}\"" }
                        div {
                            class: "author",
                            div { class: "avatar", "{t.initial()}" }
                            div {
                                p { class: "author-name", "{t.name}" }
                                p { class: "author-role", "{t.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction(on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        section {
            class: "cta panel",
            div { class: "cta-cup cta-cup-left", "☕" }
            div { class: "cta-cup cta-cup-right", "☕" }
            h2 {
                class: "cta-title",
                "Your Future Won't Wait."
                br {}
                span { class: "accent", "Start Today." }
            }
            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| on_navigate.call(Destination::GetStarted),
                "🔵 Get Started Free"
            }
        }
    }
}

#[component]
fn SiteFooter(config: SiteConfig) -> Element {
    let mut subscription = use_signal(Subscription::default);
    let mailto = config.contact.mailto();

    let handle_subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        subscription.write().submit();
    };

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid panel",

                div {
                    h3 { class: "footer-brand", "{config.brand.name}" }
                    p { class: "footer-text", "{config.brand.about}" }
                    div {
                        class: "footer-social",
                        for icon in SOCIAL_ICONS {
                            a { key: "{icon}", class: "social-icon", href: "#", "{icon}" }
                        }
                    }
                }

                div {
                    h4 { "Quick Links" }
                    ul {
                        class: "footer-links",
                        for link in QUICK_LINKS {
                            li {
                                key: "{link}",
                                button { class: "link-button", r#type: "button", "{link}" }
                            }
                        }
                    }
                }

                div {
                    h4 { "Contact Us" }
                    a {
                        class: "footer-contact",
                        href: "{mailto}",
                        "📧 {config.contact.email}"
                    }
                    p { class: "footer-text", "☎️ {config.contact.phone}" }
                }

                div {
                    h4 { "Stay Updated" }
                    form {
                        class: "subscribe",
                        onsubmit: handle_subscribe,
                        input {
                            r#type: "email",
                            placeholder: "Your email",
                            value: subscription().email,
                            oninput: move |evt: FormEvent| {
                                let mut s = subscription.write();
                                s.email = evt.value();
                                s.notice = None;
                            },
                        }
                        button { class: "primary-button", r#type: "submit", "Subscribe ☕" }
                    }
                    if let Some(notice) = subscription().notice {
                        p { class: "notice", role: "status", "{notice}" }
                    }
                }
            }
            div {
                class: "copyright",
                p { "{config.brand.copyright}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_clears_email_and_thanks() {
        let mut s = Subscription {
            email: "reader@example.com".to_string(),
            notice: None,
        };
        assert!(s.submit());
        assert!(s.email.is_empty());
        assert_eq!(s.notice, Some("Thank you for subscribing! ☕"));
    }

    #[test]
    fn test_subscribe_ignores_empty_email() {
        let mut s = Subscription::default();
        assert!(!s.submit());
        assert_eq!(s, Subscription::default());
    }
}
