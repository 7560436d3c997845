//! Site chrome and content sections for PakTechnology.
//!
//! Every section owns its static content and any local selection state;
//! pages only decide the order.

mod contact_section;
mod cta_banner;
mod demo_section;
mod faq_section;
mod footer;
mod hero;
mod journey_roadmap;
mod layout;
mod nav_header;
mod pricing_table;
mod project_detail_section;
mod projects_grid;
mod projects_hero;
mod services_section;
mod testimonials_section;
mod why_us_section;

pub use contact_section::ContactSection;
pub use cta_banner::CtaBanner;
pub use demo_section::DemoSection;
pub use faq_section::FaqSection;
pub use footer::Footer;
pub use hero::Hero;
pub use journey_roadmap::ClientJourneyRoadmap;
pub use layout::SiteLayout;
pub use nav_header::{NavHeader, NavLocation};
pub use pricing_table::PricingTable;
pub use project_detail_section::ProjectDetailSection;
pub use projects_grid::ProjectsGrid;
pub use projects_hero::ProjectsHero;
pub use services_section::ServicesSection;
pub use testimonials_section::TestimonialsSection;
pub use why_us_section::WhyUsSection;
