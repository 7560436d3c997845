//! PakTechnology Site Core Library
//!
//! Everything behind the marketing site that does not touch the DOM.
//!
//! ## Overview
//!
//! The site is a tree of presentation sections fed by static content. This
//! crate owns the parts that can be reasoned about without a renderer:
//!
//! - **Content**: literal catalogs of services, pricing tiers, testimonials,
//!   FAQs, projects and the client journey
//! - **Selection**: per-section UI state (active category, open accordion
//!   item, billing cycle, carousel steps, reveal latch) as immutable values
//! - **Contact**: the form record, validation and the submission transports
//! - **Ambient**: configuration, logging and translations
//!
//! ## Quick Start
//!
//! ```ignore
//! use paktech_core::content::services;
//! use paktech_core::selection::CategoryFilter;
//!
//! let filter = CategoryFilter::from_items(services());
//! let filter = filter.select("Design");
//! for service in filter.apply(services()) {
//!     println!("{} - {}", service.title, service.description);
//! }
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod selection;

rust_i18n::i18n!("locales", fallback = "en");

// Re-exports
pub use config::{ContactConfig, SiteConfig, SiteSection};
pub use contact::{
    build_transport, submit, ContactField, ContactForm, ContactReceipt, ContactRequest,
    ContactSession, ContactTransport, HttpTransport, SimulatedTransport,
    SubmissionStatus,
};
pub use error::{ConfigError, ConfigResult, ContactError, ContactResult};
pub use i18n::{tr, tr_format, Locale};
pub use selection::{
    Accordion, BillingCycle, CarouselDirection, CategoryFilter, Categorized, RevealLatch,
};
