//! Footer Component
//!
//! Brand blurb, quick links and contact channels.

use dioxus::prelude::*;
use paktech_core::content::{contact_channels, COMPANY_NAME};
use paktech_core::tr;

use crate::components::NavLocation;
use crate::context::use_locale;

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    h3 { class: "footer-title", "{COMPANY_NAME}" }
                    p { class: "footer-tagline", {tr(locale(), "footer.tagline")} }
                }

                nav { class: "footer-links",
                    h4 { class: "footer-heading", {tr(locale(), "footer.quick_links")} }
                    ul {
                        for location in NavLocation::all().iter().copied() {
                            li { key: "{location:?}",
                                Link { to: location.route(), class: "footer-link",
                                    {tr(locale(), location.label_key())}
                                }
                            }
                        }
                    }
                }

                div { class: "footer-contact",
                    h4 { class: "footer-heading", {tr(locale(), "contact.info_title")} }
                    ul {
                        for channel in contact_channels() {
                            li { key: "{channel.label}", class: "footer-channel",
                                span { class: "footer-channel-icon", "{channel.icon}" }
                                if let Some(href) = channel.href {
                                    a { href: "{href}", "{channel.value}" }
                                } else {
                                    span { "{channel.value}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom container",
                "\u{00A9} {COMPANY_NAME}. "
                {tr(locale(), "footer.rights")}
            }
        }
    }
}
