use dioxus::prelude::*;

use store::SiteConfig;
use ui::{AuthProvider, Destination, SessionClient};
use views::{Assessment, Dashboard, Explore, GetStarted, Landing, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/assessment")]
    Assessment {},
    #[route("/explore")]
    Explore {},
    #[route("/get-started")]
    GetStarted {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Landing {},
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Assessment => Route::Assessment {},
            Destination::Explore => Route::Explore {},
            Destination::GetStarted => Route::GetStarted {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    let (config, config_error) = match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).ok();

    if let Some(e) = config_error {
        tracing::warn!("Invalid {}, using defaults: {}", SiteConfig::filename(), e);
    }
    tracing::info!(storage = config.storage.scope.as_str(), "starting");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<SiteConfig>();
    use_context_provider(|| ui::make_ui_state(config.storage.scope));
    use_context_provider(SessionClient::new);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::PAGES_CSS }
        document::Title { "{config.brand.name}" }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
