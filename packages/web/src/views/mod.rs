use dioxus::prelude::*;
use ui::Destination;

use crate::Route;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod destinations;
pub use destinations::{Assessment, Dashboard, Explore, GetStarted};

/// Route a page's [`Destination`] requests through the app router.
pub(crate) fn use_route_navigation() -> EventHandler<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| {
        nav.push(Route::from(destination));
    })
}
