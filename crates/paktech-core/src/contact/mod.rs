//! Contact form model and submission.
//!
//! The form record is validated locally, turned into a [`ContactRequest`] and
//! handed to a [`ContactTransport`]. Two transports exist:
//!
//! - [`SimulatedTransport`]: resolves after a fixed delay, for builds without
//!   a backend
//! - [`HttpTransport`]: JSON `POST` to a configured endpoint
//!
//! Failures come back as one of three [`ContactError`](crate::ContactError)
//! kinds (validation, network, server). There is no retry; the visitor
//! resubmits.

mod form;
mod session;
mod transport;

use std::sync::Arc;
use std::time::{Duration, Instant};

pub use form::{ContactField, ContactForm, ContactReceipt, ContactRequest, MAX_MESSAGE_CHARS};
pub use session::{ContactSession, SubmissionStatus};
pub use transport::{ContactTransport, HttpTransport, SimulatedTransport};

use crate::config::ContactConfig;
use crate::error::ContactResult;

/// Send `request` through `transport`, logging the outcome.
pub async fn submit(
    transport: &dyn ContactTransport,
    request: &ContactRequest,
) -> ContactResult<ContactReceipt> {
    let started = Instant::now();
    tracing::info!(transport = %transport.describe(), subject = %request.subject, "submitting contact form");

    let outcome = transport.send(request).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &outcome {
        Ok(receipt) => tracing::info!(
            elapsed_ms,
            id = receipt.id.as_deref().unwrap_or("-"),
            "contact form delivered"
        ),
        Err(err) => tracing::error!(elapsed_ms, "contact form submission failed: {}", err),
    }
    outcome
}

/// Pick the transport described by `config`.
///
/// An endpoint selects HTTP delivery; without one submissions are simulated.
pub fn build_transport(config: &ContactConfig) -> ContactResult<Arc<dyn ContactTransport>> {
    match &config.endpoint {
        Some(endpoint) => {
            let transport =
                HttpTransport::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))?;
            Ok(Arc::new(transport))
        }
        None => Ok(Arc::new(SimulatedTransport::new(Duration::from_millis(
            config.simulated_delay_ms,
        )))),
    }
}
