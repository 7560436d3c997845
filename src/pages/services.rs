use dioxus::prelude::*;

use crate::components::{ClientJourneyRoadmap, CtaBanner, ServicesSection};

#[component]
pub fn Services() -> Element {
    rsx! {
        ServicesSection { animated: false }
        ClientJourneyRoadmap {}
        CtaBanner {}
    }
}
