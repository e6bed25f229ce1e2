//! Login / register / guest page.

use dioxus::prelude::*;
use ui::views::AuthPageView;

use super::use_route_navigation;

#[component]
pub fn Login() -> Element {
    let on_navigate = use_route_navigation();

    rsx! {
        AuthPageView { on_navigate: on_navigate }
    }
}
