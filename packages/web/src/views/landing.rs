use dioxus::prelude::*;
use ui::views::LandingView;

use super::use_route_navigation;

#[component]
pub fn Landing() -> Element {
    let on_navigate = use_route_navigation();

    rsx! {
        LandingView { on_navigate: on_navigate }
    }
}
