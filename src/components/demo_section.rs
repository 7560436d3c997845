//! Demo booking pitch.

use dioxus::prelude::*;
use paktech_core::content::demo_highlights;
use paktech_core::tr;
use paktech_ui::{Button, ButtonSize, SectionHeader};

use crate::context::use_locale;

#[component]
pub fn DemoSection() -> Element {
    let locale = use_locale();

    rsx! {
        section { id: "demo", class: "section demo-section",
            div { class: "container demo-inner",
                div { class: "demo-copy",
                    SectionHeader {
                        eyebrow: tr(locale(), "demo.eyebrow"),
                        title: tr(locale(), "demo.title"),
                        subtitle: tr(locale(), "demo.subtitle"),
                        centered: false,
                    }
                    Button {
                        href: "/contact".to_string(),
                        size: ButtonSize::Large,
                        trailing: rsx! { "\u{2192}" },
                        {tr(locale(), "demo.cta")}
                    }
                }

                ul { class: "demo-highlights",
                    for highlight in demo_highlights() {
                        li { key: "{highlight.title}", class: "demo-highlight",
                            span { class: "demo-check", "aria-hidden": "true", "\u{2713}" }
                            div {
                                strong { "{highlight.title}" }
                                p { "{highlight.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
