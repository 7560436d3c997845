use dioxus::prelude::*;
use paktech_core::content::projects;
use paktech_core::{tr, tr_format, CategoryFilter};

use crate::context::use_locale;

/// Projects page heading with the portfolio size per category.
#[component]
pub fn ProjectsHero() -> Element {
    let locale = use_locale();
    let counts = use_hook(|| CategoryFilter::from_items(projects()).counts(projects()));
    let total = projects().len().to_string();

    rsx! {
        section { class: "projects-hero",
            div { class: "container",
                span { class: "hero-eyebrow", {tr(locale(), "projects.eyebrow")} }
                h1 { class: "projects-hero-title", {tr(locale(), "projects.title")} }
                p { class: "projects-hero-subtitle", {tr(locale(), "projects.subtitle")} }
                p { class: "projects-total",
                    {tr_format(locale(), "projects.count", &[("count", total.as_str())])}
                }
                ul { class: "projects-breakdown",
                    for (category, count) in counts {
                        li { key: "{category}", class: "projects-breakdown-item",
                            span { class: "breakdown-count", "{count}" }
                            span { class: "breakdown-label", "{category}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paktech_core::Locale;

    #[test]
    fn heading_shows_total_and_categories() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(Locale::English));
            rsx! { ProjectsHero {} }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(&format!("{} projects", projects().len())));
        for project in projects() {
            assert!(html.contains(project.category));
        }
    }
}
