//! Testimonials carousel.
//!
//! A horizontally scrolling track with previous/next controls. Each press
//! scrolls by a fixed step; the browser clamps at either end.

use dioxus::prelude::*;
use paktech_core::content::{testimonials, Testimonial, MAX_RATING};
use paktech_core::selection::DEFAULT_SCROLL_STEP;
use paktech_core::{tr, CarouselDirection};
use paktech_ui::{next_dom_id, IconButton, SectionHeader};

use crate::context::use_locale;

#[component]
pub fn TestimonialsSection(#[props(default = true)] animated: bool) -> Element {
    let locale = use_locale();
    let track_id = use_hook(|| next_dom_id("testimonials-track"));

    let scroll = {
        let track_id = track_id.clone();
        move |direction: CarouselDirection| {
            let script = direction.scroll_script(&track_id, DEFAULT_SCROLL_STEP);
            // scrollBy reports nothing back, so the eval handle is not awaited
            document::eval(&script);
        }
    };
    let scroll_prev = scroll.clone();
    let scroll_next = scroll;

    rsx! {
        section { id: "testimonials", class: "section testimonials-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "testimonials.eyebrow"),
                    title: tr(locale(), "testimonials.title"),
                    subtitle: tr(locale(), "testimonials.subtitle"),
                    animated,
                }

                div { class: "carousel",
                    IconButton {
                        class: "carousel-control prev".to_string(),
                        aria_label: tr(locale(), CarouselDirection::Previous.aria_label_key()),
                        onclick: move |_| scroll_prev(CarouselDirection::Previous),
                        "\u{2039}"
                    }

                    div { id: "{track_id}", class: "carousel-track",
                        for (index, testimonial) in testimonials().iter().enumerate() {
                            TestimonialCard { key: "{index}", testimonial: *testimonial }
                        }
                    }

                    IconButton {
                        class: "carousel-control next".to_string(),
                        aria_label: tr(locale(), CarouselDirection::Next.aria_label_key()),
                        onclick: move |_| scroll_next(CarouselDirection::Next),
                        "\u{203A}"
                    }
                }
            }
        }
    }
}

/// Filled and empty star strings for a clamped rating.
fn star_strings(stars: u8) -> (String, String) {
    let filled = usize::from(stars.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    ("\u{2605}".repeat(filled), "\u{2606}".repeat(empty))
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    let initials = testimonial.initials();
    let byline = testimonial.byline();

    rsx! {
        figure { class: "card testimonial-card",
            if let Some(stars) = testimonial.stars() {
                {
                    let (filled, empty) = star_strings(stars);
                    rsx! {
                        div { class: "rating", "aria-label": "{stars}/{MAX_RATING}",
                            span { class: "rating-filled", "{filled}" }
                            span { class: "rating-empty", "{empty}" }
                        }
                    }
                }
            }
            blockquote { class: "testimonial-text", "\u{201C}{testimonial.text}\u{201D}" }
            figcaption { class: "testimonial-author",
                span { class: "avatar", "aria-hidden": "true", "{initials}" }
                div {
                    strong { class: "author-name", "{testimonial.author}" }
                    if let Some(byline) = byline {
                        span { class: "author-byline", "{byline}" }
                    }
                }
            }
        }
    }
}
