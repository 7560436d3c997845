//! FAQ accordion.

use dioxus::prelude::*;
use paktech_core::content::faqs;
use paktech_core::{tr, Accordion};
use paktech_ui::SectionHeader;

use crate::context::use_locale;

/// Questions with at most one answer expanded. `limit` keeps only the first
/// few questions.
#[component]
pub fn FaqSection(
    limit: Option<usize>,
    #[props(default = true)] animated: bool,
) -> Element {
    let locale = use_locale();
    let mut accordion = use_signal(Accordion::closed);
    let shown = &faqs()[..limit.unwrap_or(usize::MAX).min(faqs().len())];

    rsx! {
        section { id: "faq", class: "section faq-section",
            div { class: "container narrow",
                SectionHeader {
                    eyebrow: tr(locale(), "faq.eyebrow"),
                    title: tr(locale(), "faq.title"),
                    subtitle: tr(locale(), "faq.subtitle"),
                    animated,
                }

                div { class: "accordion",
                    for (index, faq) in shown.iter().enumerate() {
                        {
                            let open = accordion().is_open(index);
                            let panel_id = format!("faq-panel-{index}");
                            rsx! {
                                div {
                                    key: "{index}",
                                    class: if open { "accordion-item open" } else { "accordion-item" },
                                    button {
                                        class: "accordion-trigger",
                                        r#type: "button",
                                        "aria-expanded": if open { "true" } else { "false" },
                                        "aria-controls": "{panel_id}",
                                        onclick: move |_| {
                                            let next = accordion().toggle(index);
                                            accordion.set(next);
                                        },
                                        span { class: "accordion-question", "{faq.question}" }
                                        span { class: "accordion-icon", "aria-hidden": "true",
                                            if open { "\u{2212}" } else { "+" }
                                        }
                                    }
                                    if open {
                                        div { id: "{panel_id}", class: "accordion-panel", role: "region",
                                            p { "{faq.answer}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
