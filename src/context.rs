//! Site context provider for PakTechnology.
//!
//! Provides the active locale and the contact transport to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| locale_signal);
//! use_context_provider(|| SiteContext::from_runtime());
//!
//! // In child components
//! let locale = use_locale();
//! let label = tr(locale(), "nav.home");
//! ```

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use paktech_core::config::DEFAULT_SIMULATED_DELAY_MS;
use paktech_core::{ContactTransport, Locale, SimulatedTransport};

/// Shared contact transport type for context.
pub type SharedTransport = Arc<dyn ContactTransport>;

/// Read-only site services shared with every page.
#[derive(Clone)]
pub struct SiteContext {
    pub transport: SharedTransport,
}

impl SiteContext {
    /// Context built from the runtime set up in `main`.
    ///
    /// Falls back to a simulated transport when launched without one
    /// (previews, tests).
    pub fn from_runtime() -> Self {
        match crate::get_runtime() {
            Some(runtime) => Self {
                transport: runtime.transport.clone(),
            },
            None => Self::simulated(),
        }
    }

    pub fn simulated() -> Self {
        Self {
            transport: Arc::new(SimulatedTransport::new(Duration::from_millis(
                DEFAULT_SIMULATED_DELAY_MS,
            ))),
        }
    }
}

/// Locale the site opens in.
pub fn initial_locale() -> Locale {
    crate::get_runtime()
        .map(|r| r.config.site.locale)
        .unwrap_or_default()
}

/// Hook to access the active locale.
///
/// Returns the signal so the header can switch it.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Hook to access the contact transport.
pub fn use_transport() -> SharedTransport {
    use_context::<SiteContext>().transport
}
