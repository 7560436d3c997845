//! Service catalog filtered by category.

use dioxus::prelude::*;
use paktech_core::content::{services, Service};
use paktech_core::{tr, CategoryFilter};
use paktech_ui::{CategoryPills, SectionHeader};

use crate::context::use_locale;

/// Service cards for the active category. The first category is active on
/// mount.
#[component]
pub fn ServicesSection(#[props(default = true)] animated: bool) -> Element {
    let locale = use_locale();
    let mut filter = use_signal(|| CategoryFilter::from_items(services()));

    let visible: Vec<&'static Service> = filter.read().apply(services());
    let categories = filter.read().categories().to_vec();
    let counts: Vec<usize> = filter
        .read()
        .counts(services())
        .into_iter()
        .map(|(_, n)| n)
        .collect();

    rsx! {
        section { id: "services", class: "section services-section",
            div { class: "container",
                SectionHeader {
                    eyebrow: tr(locale(), "services.eyebrow"),
                    title: tr(locale(), "services.title"),
                    subtitle: tr(locale(), "services.subtitle"),
                    animated,
                }

                CategoryPills {
                    categories,
                    selected: filter.read().active(),
                    counts,
                    aria_label: tr(locale(), "services.eyebrow"),
                    on_select: move |cat: &'static str| {
                        tracing::debug!("services category -> {}", cat);
                        let next = filter().select(cat);
                        filter.set(next);
                    },
                }

                div { class: "card-grid services-grid",
                    for service in visible {
                        ServiceCard { key: "{service.title}", service: *service }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service) -> Element {
    rsx! {
        article { class: "card service-card",
            div { class: "service-icon", "aria-hidden": "true", "{service.icon}" }
            h3 { class: "card-title", "{service.title}" }
            p { class: "card-text", "{service.description}" }
            ul { class: "feature-list",
                for feature in service.features {
                    li { key: "{feature}", class: "feature-item", "{feature}" }
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

    #[test]
    fn shows_only_first_category_on_mount() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(Locale::English));
            rsx! { ServicesSection { animated: false } }
        }
        let html = render(app);
        let first = services()[0].category;
        for service in services() {
            let shown = html.contains(service.title);
            assert_eq!(shown, service.category == first, "{}", service.title);
        }
        assert!(html.contains("What we do"));
    }
}
