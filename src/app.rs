use dioxus::prelude::*;
use paktech_core::Locale;

use crate::components::SiteLayout;
use crate::context::{initial_locale, SiteContext};
use crate::pages::{Contact, Home, PageNotFound, Pricing, ProjectDetail, Projects, Services};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page assembling every section
/// - `/services` - Service catalog with category filter
/// - `/pricing` - Pricing tiers
/// - `/projects` - Portfolio grid
/// - `/projects/:slug` - One case study
/// - `/contact` - Contact form and FAQ
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/pricing")]
        Pricing {},
        #[route("/projects")]
        Projects {},
        #[route("/projects/:slug")]
        ProjectDetail { slug: String },
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, locale and transport context, and routing.
#[component]
pub fn App() -> Element {
    let locale: Signal<Locale> = use_signal(initial_locale);

    use_context_provider(|| locale);
    use_context_provider(SiteContext::from_runtime);

    let dir = locale().direction();
    let lang = locale().code();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "site-root", dir: "{dir}", lang: "{lang}",
            Router::<Route> {}
        }
    }
}
