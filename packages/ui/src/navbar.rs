use dioxus::prelude::*;

/// Fixed bar in the top-right corner holding page-level buttons.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            {children}
        }
    }
}
