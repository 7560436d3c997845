//! Navigation Header Component
//!
//! Desktop: horizontal header with brand, nav links and locale switcher
//! Narrow screens: links collapse behind a menu toggle

use dioxus::prelude::*;
use paktech_core::content::COMPANY_NAME;
use paktech_core::{tr, Locale};

use crate::app::Route;
use crate::context::use_locale;

/// Top-level navigation destinations
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Home,
    Services,
    Pricing,
    Projects,
    Contact,
}

impl NavLocation {
    pub fn all() -> &'static [NavLocation] {
        &[
            NavLocation::Home,
            NavLocation::Services,
            NavLocation::Pricing,
            NavLocation::Projects,
            NavLocation::Contact,
        ]
    }

    /// Translation key of the link label
    pub fn label_key(&self) -> &'static str {
        match self {
            NavLocation::Home => "nav.home",
            NavLocation::Services => "nav.services",
            NavLocation::Pricing => "nav.pricing",
            NavLocation::Projects => "nav.projects",
            NavLocation::Contact => "nav.contact",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Services => Route::Services {},
            NavLocation::Pricing => Route::Pricing {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::Contact => Route::Contact {},
        }
    }

    /// Location highlighted for `route` (case studies count as Projects)
    pub fn for_route(route: &Route) -> Option<NavLocation> {
        match route {
            Route::Home {} => Some(NavLocation::Home),
            Route::Services {} => Some(NavLocation::Services),
            Route::Pricing {} => Some(NavLocation::Pricing),
            Route::Projects {} | Route::ProjectDetail { .. } => Some(NavLocation::Projects),
            Route::Contact {} => Some(NavLocation::Contact),
            Route::PageNotFound { .. } => None,
        }
    }
}

/// Navigation Header component
///
/// - Left: brand wordmark linking home
/// - Center: navigation links
/// - Right: locale switcher and menu toggle
#[component]
pub fn NavHeader() -> Element {
    let mut locale = use_locale();
    let route = use_route::<Route>();
    let current = NavLocation::for_route(&route);
    let mut menu_open = use_signal(|| false);

    let mut switch_locale = move |next: Locale| {
        if locale() != next {
            tracing::info!("Switching locale {} -> {}", locale(), next);
            locale.set(next);
        }
    };

    let nav_class = if menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-inner container",
                Link { to: Route::Home {}, class: "nav-brand",
                    span { class: "nav-brand-mark", "P" }
                    span { class: "nav-brand-name", "{COMPANY_NAME}" }
                }

                button {
                    class: "nav-toggle",
                    r#type: "button",
                    "aria-label": tr(locale(), "nav.menu"),
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.set(!menu_open()),
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                }

                nav { class: "{nav_class}",
                    for location in NavLocation::all().iter().copied() {
                        Link {
                            key: "{location:?}",
                            to: location.route(),
                            class: if current == Some(location) { "nav-link active" } else { "nav-link" },
                            onclick: move |_| menu_open.set(false),
                            {tr(locale(), location.label_key())}
                        }
                    }
                }

                div {
                    class: "locale-switcher",
                    role: "group",
                    "aria-label": tr(locale(), "nav.language"),
                    for option in Locale::all().iter().copied() {
                        button {
                            key: "{option}",
                            class: if locale() == option { "locale-option active" } else { "locale-option" },
                            r#type: "button",
                            lang: option.code(),
                            "aria-pressed": if locale() == option { "true" } else { "false" },
                            onclick: move |_| switch_locale(option),
                            "{option.native_name()}"
                        }
                    }
                }
            }
        }
    }
}
