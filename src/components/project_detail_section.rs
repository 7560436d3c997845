//! One case study, looked up by slug.

use dioxus::prelude::*;
use paktech_core::content::{project_by_slug, Project};
use paktech_core::tr;
use paktech_ui::{Button, ButtonVariant};

use crate::context::use_locale;

/// Case study for `slug`, or a not-found block linking back to the
/// projects page.
#[component]
pub fn ProjectDetailSection(slug: String) -> Element {
    match project_by_slug(&slug) {
        Some(project) => rsx! { CaseStudy { project: *project } },
        None => {
            tracing::warn!(slug = %slug, "no project with this slug");
            rsx! { MissingProject {} }
        }
    }
}

#[component]
fn CaseStudy(project: Project) -> Element {
    let locale = use_locale();

    rsx! {
        article { class: "section case-study",
            div { class: "container narrow",
                BackLink {}
                span { class: "project-category", "{project.category}" }
                h1 { class: "case-study-title", "{project.title}" }
                p { class: "case-study-summary", "{project.summary}" }

                dl { class: "case-study-facts",
                    div {
                        dt { {tr(locale(), "projects.client")} }
                        dd { "{project.client}" }
                    }
                    div {
                        dt { {tr(locale(), "projects.duration")} }
                        dd { "{project.duration}" }
                    }
                }

                h2 { {tr(locale(), "projects.challenge")} }
                p { "{project.challenge}" }

                h2 { {tr(locale(), "projects.solution")} }
                p { "{project.solution}" }

                h2 { {tr(locale(), "projects.results")} }
                ul { class: "case-study-results",
                    for result in project.results {
                        li { key: "{result}", "{result}" }
                    }
                }

                h2 { {tr(locale(), "projects.tech_stack")} }
                ul { class: "tech-tags",
                    for tech in project.tech_stack {
                        li { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MissingProject() -> Element {
    let locale = use_locale();

    rsx! {
        section { class: "section not-found",
            div { class: "container narrow",
                h1 { {tr(locale(), "projects.not_found")} }
                p { {tr(locale(), "projects.not_found_body")} }
                BackLink {}
            }
        }
    }
}

#[component]
fn BackLink() -> Element {
    let locale = use_locale();

    rsx! {
        Button {
            href: "/projects".to_string(),
            variant: ButtonVariant::Ghost,
            leading: rsx! { "\u{2190}" },
            class: "back-link",
            {tr(locale(), "projects.back")}
        }
    }
}
