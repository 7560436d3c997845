use dioxus::prelude::*;

use crate::components::{CtaBanner, ProjectDetailSection};

/// Case study page for `/projects/:slug`.
#[component]
pub fn ProjectDetail(slug: String) -> Element {
    rsx! {
        ProjectDetailSection { slug }
        CtaBanner {}
    }
}
