//! Portfolio grid filtered by category.

use dioxus::prelude::*;
use paktech_core::content::{projects, Project};
use paktech_core::{tr, CategoryFilter};
use paktech_ui::{Button, ButtonSize, ButtonVariant, CategoryPills};

use crate::context::use_locale;

#[component]
pub fn ProjectsGrid() -> Element {
    let locale = use_locale();
    let mut filter = use_signal(|| CategoryFilter::from_items(projects()));

    let visible: Vec<&'static Project> = filter.read().apply(projects());
    let categories = filter.read().categories().to_vec();

    rsx! {
        section { id: "projects", class: "section projects-section",
            div { class: "container",
                CategoryPills {
                    categories,
                    selected: filter.read().active(),
                    aria_label: tr(locale(), "projects.eyebrow"),
                    on_select: move |cat: &'static str| {
                        let next = filter().select(cat);
                        filter.set(next);
                    },
                }

                div { class: "card-grid projects-grid",
                    for project in visible {
                        ProjectCard { key: "{project.slug}", project: *project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let locale = use_locale();

    rsx! {
        article { class: "card project-card",
            span { class: "project-category", "{project.category}" }
            h3 { class: "card-title", "{project.title}" }
            p { class: "project-client", "{project.client}" }
            p { class: "card-text", "{project.summary}" }
            ul { class: "tech-tags",
                for tech in project.tech_stack {
                    li { key: "{tech}", class: "tech-tag", "{tech}" }
                }
            }
            Button {
                href: format!("/projects/{}", project.slug),
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                trailing: rsx! { "\u{2192}" },
                {tr(locale(), "projects.view")}
            }
        }
    }
}
