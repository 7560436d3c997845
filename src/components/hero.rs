//! Hero banner at the top of the home page.

use dioxus::prelude::*;
use paktech_core::content::{hero_stats, TAGLINE};
use paktech_core::tr;
use paktech_ui::{Button, ButtonSize, ButtonVariant};

use crate::context::use_locale;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();

    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop" }
            div { class: "container hero-inner",
                span { class: "hero-eyebrow", {tr(locale(), "hero.eyebrow")} }
                h1 { class: "hero-title", {tr(locale(), "hero.title")} }
                p { class: "hero-subtitle", "{TAGLINE}" }

                div { class: "hero-actions",
                    Button {
                        href: "/contact".to_string(),
                        size: ButtonSize::Large,
                        trailing: rsx! { "\u{2192}" },
                        {tr(locale(), "hero.cta_primary")}
                    }
                    Button {
                        href: "/projects".to_string(),
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        {tr(locale(), "hero.cta_secondary")}
                    }
                }

                dl { class: "hero-stats",
                    for stat in hero_stats() {
                        div { key: "{stat.label}", class: "hero-stat",
                            dt { class: "hero-stat-value", "{stat.value}" }
                            dd { class: "hero-stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
