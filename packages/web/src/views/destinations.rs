//! Routes for product sections that are not built in this repository.

use dioxus::prelude::*;
use ui::views::DestinationView;
use ui::Destination;

use super::use_route_navigation;

#[component]
pub fn Dashboard() -> Element {
    let on_navigate = use_route_navigation();
    rsx! { DestinationView { destination: Destination::Dashboard, on_navigate: on_navigate } }
}

#[component]
pub fn Assessment() -> Element {
    let on_navigate = use_route_navigation();
    rsx! { DestinationView { destination: Destination::Assessment, on_navigate: on_navigate } }
}

#[component]
pub fn Explore() -> Element {
    let on_navigate = use_route_navigation();
    rsx! { DestinationView { destination: Destination::Explore, on_navigate: on_navigate } }
}

#[component]
pub fn GetStarted() -> Element {
    let on_navigate = use_route_navigation();
    rsx! { DestinationView { destination: Destination::GetStarted, on_navigate: on_navigate } }
}
