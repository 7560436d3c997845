//! Closing call-to-action banner.

use dioxus::prelude::*;
use paktech_core::tr;
use paktech_ui::{Button, ButtonSize, ButtonVariant};

use crate::context::use_locale;

/// Full-width banner with one call to action.
///
/// Every text prop falls back to the shared `cta.*` copy; the button goes
/// to the contact page unless `href` says otherwise.
#[component]
pub fn CtaBanner(
    title: Option<String>,
    subtitle: Option<String>,
    button_label: Option<String>,
    #[props(default = "/contact".to_string())] href: String,
) -> Element {
    let locale = use_locale();
    let title = title.unwrap_or_else(|| tr(locale(), "cta.title"));
    let subtitle = subtitle.unwrap_or_else(|| tr(locale(), "cta.subtitle"));
    let button_label = button_label.unwrap_or_else(|| tr(locale(), "cta.button"));

    rsx! {
        section { class: "cta-banner",
            div { class: "container cta-inner",
                div { class: "cta-copy",
                    h2 { class: "cta-title", "{title}" }
                    p { class: "cta-subtitle", "{subtitle}" }
                }
                Button {
                    href,
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Large,
                    "{button_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paktech_core::Locale;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    // External hrefs render a plain anchor, so no router is needed here
    #[test]
    fn explicit_props_override_copy() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(Locale::English));
            rsx! {
                CtaBanner {
                    title: "Launch week".to_string(),
                    button_label: "Email us".to_string(),
                    href: "mailto:hello@paktechnology.com".to_string(),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Launch week"));
        assert!(html.contains("Email us"));
        assert!(html.contains("mailto:hello@paktechnology.com"));
        assert!(html.contains(&tr(Locale::English, "cta.subtitle")));
    }
}
