use dioxus::prelude::*;
use paktech_core::tr;
use paktech_ui::Button;

use crate::context::use_locale;

/// Catch-all page for unknown paths.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = use_locale();
    tracing::debug!(path = %segments.join("/"), "unknown route");

    rsx! {
        section { class: "section not-found",
            div { class: "container narrow",
                span { class: "not-found-code", "404" }
                h1 { {tr(locale(), "not_found.title")} }
                p { {tr(locale(), "not_found.body")} }
                Button { href: "/".to_string(), {tr(locale(), "not_found.home")} }
            }
        }
    }
}
