//! Static content catalogs.
//!
//! Every catalog is a literal slice defined once and never mutated. Items
//! carry no identity beyond their position in the slice (projects add a slug
//! for routing).

mod company;
mod faq;
mod journey;
mod pricing;
mod project;
mod service;
mod testimonial;

pub use company::{
    contact_channels, demo_highlights, hero_stats, reasons, ContactChannel, DemoHighlight,
    Reason, Stat, COMPANY_NAME, MAP_EMBED_URL, TAGLINE,
};
pub use faq::{faqs, Faq};
pub use journey::{journey_steps, JourneyStep};
pub use pricing::{format_amount, pricing_tiers, Price, PricingTier};
pub use project::{project_by_slug, projects, Project};
pub use service::{services, Service};
pub use testimonial::{testimonials, Testimonial, MAX_RATING};
