use dioxus::prelude::*;

use crate::components::{CtaBanner, DemoSection, ProjectsGrid, ProjectsHero};

/// Portfolio page.
#[component]
pub fn Projects() -> Element {
    rsx! {
        ProjectsHero {}
        ProjectsGrid {}
        DemoSection {}
        CtaBanner {}
    }
}
