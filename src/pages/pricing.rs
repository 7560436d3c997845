use dioxus::prelude::*;

use crate::components::{CtaBanner, FaqSection, PricingTable};

#[component]
pub fn Pricing() -> Element {
    rsx! {
        PricingTable { animated: false }
        FaqSection {}
        CtaBanner {}
    }
}
