//! Where the pages can send the visitor.
//!
//! The pages only name a [`Destination`]; the app shell owns the router and decides
//! how to get there. [`Navigation`] is the seam, implemented for Dioxus
//! [`EventHandler`]s so a view can forward to whatever its parent wired up.

use std::fmt;

use dioxus::prelude::*;

/// Every place the landing and auth pages link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Dashboard,
    Assessment,
    Explore,
    GetStarted,
}

impl Destination {
    pub const ALL: [Destination; 6] = [
        Destination::Home,
        Destination::Login,
        Destination::Dashboard,
        Destination::Assessment,
        Destination::Explore,
        Destination::GetStarted,
    ];

    /// Stable identifier, as used in logs.
    pub fn id(self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Login => "login",
            Destination::Dashboard => "dashboard",
            Destination::Assessment => "assessment",
            Destination::Explore => "explore",
            Destination::GetStarted => "get-started",
        }
    }

    /// URL path of the destination. The app's router serves each one at this path.
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::Assessment => "/assessment",
            Destination::Explore => "/explore",
            Destination::GetStarted => "/get-started",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Login => "Login",
            Destination::Dashboard => "Dashboard",
            Destination::Assessment => "Career Assessment",
            Destination::Explore => "Explore Career Paths",
            Destination::GetStarted => "Get Started",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fire-and-forget navigation.
pub trait Navigation {
    fn navigate(&self, destination: Destination);
}

impl<N: Navigation + ?Sized> Navigation for &N {
    fn navigate(&self, destination: Destination) {
        (**self).navigate(destination);
    }
}

impl Navigation for EventHandler<Destination> {
    fn navigate(&self, destination: Destination) {
        tracing::info!(%destination, "navigate");
        self.call(destination);
    }
}
