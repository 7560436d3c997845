use dioxus::prelude::*;
use paktech_core::content::journey_steps;
use paktech_core::tr;
use paktech_ui::SectionHeader;

use crate::context::use_locale;

/// Numbered engagement steps, first call to launch and beyond.
#[component]
pub fn ClientJourneyRoadmap() -> Element {
    let locale = use_locale();

    rsx! {
        section { id: "journey", class: "section journey-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "journey.eyebrow"),
                    title: tr(locale(), "journey.title"),
                    subtitle: tr(locale(), "journey.subtitle"),
                    animated: true,
                }

                ol { class: "journey-track",
                    for step in journey_steps() {
                        li { key: "{step.number}", class: "journey-step",
                            span { class: "journey-number", {format!("{:02}", step.number)} }
                            div { class: "journey-body",
                                h3 { class: "journey-title", "{step.title}" }
                                p { class: "journey-text", "{step.description}" }
                                span { class: "journey-duration", "{step.duration}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
