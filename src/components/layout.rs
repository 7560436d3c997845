//! Shared page frame: header, routed content, footer.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Footer, NavHeader};

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        NavHeader {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
