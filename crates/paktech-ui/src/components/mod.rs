//! Reusable UI components.
//!
//! All components render plain semantic HTML with `btn-*`, `pill`,
//! `section-header` and `form-*` classes styled by the app theme.

mod button;
mod category_pills;
mod dom_id;
mod input;
mod section_header;
mod toast;

pub use button::*;
pub use category_pills::*;
pub use dom_id::next_dom_id;
pub use input::*;
pub use section_header::*;
pub use toast::*;
