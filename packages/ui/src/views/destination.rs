use dioxus::prelude::*;

use crate::navigation::Destination;

/// Stand-in for sections of the product that live outside these pages.
#[component]
pub fn DestinationView(destination: Destination, on_navigate: EventHandler<Destination>) -> Element {
    let auth = crate::use_auth();
    let state = auth();

    rsx! {
        div {
            class: "destination",
            h2 { class: "destination-title", "{destination.title()}" }
            if let Some(user) = state.user.as_ref() {
                p { class: "destination-note", "Signed in as {user.display_name()}." }
            } else if state.guest {
                p { class: "destination-note", "Browsing as a guest. Your progress won't be saved." }
            }
            p { class: "destination-note", "This section is on its way." }
            button {
                class: "link-button",
                r#type: "button",
                onclick: move |_| on_navigate.call(Destination::Home),
                "← Back to Home"
            }
        }
    }
}
