//! Per-section UI selection state.
//!
//! Every type here is a plain value: transitions consume `self` and return
//! the next state, so a component keeps one in a signal and overwrites it.
//! Nothing is shared between section instances and nothing is persisted;
//! remounting a section starts from the initial state again.

mod accordion;
mod billing;
mod carousel;
mod category;
mod reveal;

pub use accordion::Accordion;
pub use billing::BillingCycle;
pub use carousel::{CarouselDirection, DEFAULT_SCROLL_STEP};
pub use category::{CategoryFilter, Categorized};
pub use reveal::{observe_script, RevealLatch};
