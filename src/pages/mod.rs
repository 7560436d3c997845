//! Page components for the PakTechnology site.
//!
//! Each page is a fixed, ordered list of sections. Sections own their state;
//! pages pass nothing between them.

mod contact;
mod home;
mod not_found;
mod pricing;
mod project_detail;
mod projects;
mod services;

pub use contact::Contact;
pub use home::Home;
pub use not_found::PageNotFound;
pub use pricing::Pricing;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
pub use services::Services;
