//! Why-us reasons grid with headline stats.

use dioxus::prelude::*;
use paktech_core::content::{hero_stats, reasons};
use paktech_core::tr;
use paktech_ui::SectionHeader;

use crate::context::use_locale;

#[component]
pub fn WhyUsSection() -> Element {
    let locale = use_locale();

    rsx! {
        section { id: "why-us", class: "section why-us-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "why_us.eyebrow"),
                    title: tr(locale(), "why_us.title"),
                    subtitle: tr(locale(), "why_us.subtitle"),
                    animated: true,
                }

                div { class: "card-grid reasons-grid",
                    for reason in reasons() {
                        article { key: "{reason.title}", class: "card reason-card",
                            div { class: "reason-icon", "aria-hidden": "true", "{reason.icon}" }
                            h3 { class: "card-title", "{reason.title}" }
                            p { class: "card-text", "{reason.description}" }
                        }
                    }
                }

                div { class: "stats-band",
                    for stat in hero_stats() {
                        div { key: "{stat.label}", class: "stat",
                            span { class: "stat-value", "{stat.value}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
