use dioxus::prelude::*;

use crate::components::{ContactSection, FaqSection};

#[component]
pub fn Contact() -> Element {
    rsx! {
        ContactSection { animated: false }
        FaqSection {}
    }
}
