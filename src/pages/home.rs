use dioxus::prelude::*;

use crate::components::{
    ClientJourneyRoadmap, CtaBanner, FaqSection, Hero, PricingTable, ServicesSection,
    TestimonialsSection, WhyUsSection,
};

/// Home page: every marketing section in order.
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        ServicesSection {}
        WhyUsSection {}
        ClientJourneyRoadmap {}
        TestimonialsSection {}
        PricingTable {}
        FaqSection { limit: 4 }
        CtaBanner {}
    }
}
