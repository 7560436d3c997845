//! Section Header Component
//!
//! Eyebrow / title / subtitle block that opens every content section.

use dioxus::prelude::*;
use paktech_core::selection::{observe_script, RevealLatch};

use crate::components::next_dom_id;

/// Properties for the SectionHeader component
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    pub title: String,
    pub subtitle: Option<String>,
    /// Small label above the title
    pub eyebrow: Option<String>,
    #[props(default = true)]
    pub centered: bool,
    /// Fade/slide in once when first scrolled into view
    #[props(default = false)]
    pub animated: bool,
}

/// Section heading with optional one-shot entrance animation
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionHeader {
///         eyebrow: tr(locale, "services.eyebrow"),
///         title: tr(locale, "services.title"),
///         subtitle: tr(locale, "services.subtitle"),
///         animated: true,
///     }
/// }
/// ```
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let align = if props.centered {
        "section-header centered"
    } else {
        "section-header"
    };

    let body = rsx! {
        if let Some(eyebrow) = &props.eyebrow {
            span { class: "section-eyebrow", "{eyebrow}" }
        }
        h2 { class: "section-title", "{props.title}" }
        if let Some(subtitle) = &props.subtitle {
            p { class: "section-subtitle", "{subtitle}" }
        }
    };

    if !props.animated {
        return rsx! {
            header { class: "{align}", {body} }
        };
    }

    rsx! {
        AnimatedHeader { class: align.to_string(), {body} }
    }
}

/// Wrapper that holds the reveal latch, so static headers carry no state.
#[component]
fn AnimatedHeader(class: String, children: Element) -> Element {
    let id = use_hook(|| next_dom_id("section-header"));
    let mut latch = use_signal(RevealLatch::default);

    let observe_id = id.clone();
    let on_mounted = move |_: MountedEvent| {
        let observe_id = observe_id.clone();
        async move {
            if latch().is_revealed() {
                return;
            }
            let mut eval = document::eval(&observe_script(&observe_id));
            match eval.recv::<bool>().await {
                Ok(visible) => latch.set(latch().observe(visible)),
                Err(e) => {
                    // Without a working observer just show the content
                    tracing::debug!("reveal observer unavailable: {:?}", e);
                    latch.set(latch().observe(true));
                }
            }
        }
    };

    let full_class = format!("{} {}", class, latch().class());

    rsx! {
        header {
            id: "{id}",
            class: "{full_class}",
            onmounted: on_mounted,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn static_header_has_no_reveal_state() {
        fn app() -> Element {
            rsx! {
                SectionHeader {
                    eyebrow: "What we do".to_string(),
                    title: "Services".to_string(),
                    subtitle: "Pick what you need".to_string(),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("What we do"));
        assert!(html.contains("<h2 class=\"section-title\">Services</h2>"));
        assert!(html.contains("Pick what you need"));
        assert!(!html.contains("reveal"));
        assert!(!html.contains("id=\"section-header"));
    }

    #[test]
    fn animated_header_starts_hidden() {
        fn app() -> Element {
            rsx! {
                SectionHeader { title: "Pricing".to_string(), animated: true, centered: false }
            }
        }
        let html = render(app);
        assert!(html.contains("class=\"section-header reveal\""), "{html}");
        assert!(html.contains("id=\"section-header-"));
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn optional_parts_omitted() {
        fn app() -> Element {
            rsx! {
                SectionHeader { title: "FAQ".to_string() }
            }
        }
        let html = render(app);
        assert!(!html.contains("section-eyebrow"));
        assert!(!html.contains("section-subtitle"));
        assert!(html.contains("centered"));
    }
}
