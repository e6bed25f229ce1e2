//! Decorative floating coffee beans behind the page content.
//!
//! Positions and timings are rolled once per mount; the motion itself is the
//! `float` keyframe animation in the page stylesheet.

use dioxus::prelude::*;
use rand::Rng;

const GLYPHS: [&str; 3] = ["🫘", "☕", "🍂"];

/// One floating glyph, all lengths in percent or seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingItem {
    pub glyph: &'static str,
    pub left: f32,
    pub top: f32,
    /// Horizontal sway in px, in [-15, 15).
    pub drift: f32,
    /// Seconds per cycle, in [8, 20).
    pub duration: f32,
    /// Seconds before the first cycle, in [0, 5).
    pub delay: f32,
}

impl FloatingItem {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.drift, self.duration, self.delay
        )
    }
}

/// Roll `count` items. Glyphs cycle bean, cup, leaf by index.
pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<FloatingItem> {
    (0..count)
        .map(|i| FloatingItem {
            glyph: GLYPHS[i % GLYPHS.len()],
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            drift: rng.gen_range(-15.0..15.0),
            duration: rng.gen_range(8.0..20.0),
            delay: rng.gen_range(0.0..5.0),
        })
        .collect()
}

#[component]
pub fn Backdrop(count: usize) -> Element {
    let items = use_hook(move || scatter(count, &mut rand::thread_rng()));

    rsx! {
        div {
            class: "backdrop",
            aria_hidden: "true",
            div { class: "backdrop-glow" }
            for (i, item) in items.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-item",
                    style: "{item.style()}",
                    "{item.glyph}"
                }
            }
        }
    }
}
