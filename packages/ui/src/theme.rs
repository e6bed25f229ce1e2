//! Light / dark display mode.
//!
//! Each page owns its own mode signal, starting light; nothing is persisted.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// Class applied to the page root.
    pub fn class(self) -> &'static str {
        match self {
            DisplayMode::Light => "mode-light",
            DisplayMode::Dark => "mode-dark",
        }
    }

    /// Glyph on the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            DisplayMode::Light => "🌙",
            DisplayMode::Dark => "☀️",
        }
    }
}

pub type DisplayModeSignal = Signal<DisplayMode>;

/// Round button flipping the page between light and dark.
#[component]
pub fn DisplayModeToggle(mode: DisplayModeSignal) -> Element {
    let current = mode();
    rsx! {
        button {
            class: "mode-toggle",
            r#type: "button",
            title: if current.is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let mut mode = mode;
                let next = mode().toggled();
                mode.set(next);
            },
            "{current.toggle_icon()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_returns() {
        let mode = DisplayMode::default();
        assert!(!mode.is_dark());
        assert_eq!(mode.toggle_icon(), "🌙");

        let dark = mode.toggled();
        assert!(dark.is_dark());
        assert_eq!(dark.toggle_icon(), "☀️");
        assert_eq!(dark.toggled(), DisplayMode::Light);
    }
}
