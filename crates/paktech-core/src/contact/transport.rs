//! Where contact submissions go.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::contact::form::{ContactReceipt, ContactRequest};
use crate::error::{ContactError, ContactResult};

/// Delivers a validated contact request.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> ContactResult<ContactReceipt>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Resolves successfully after a fixed delay without contacting anything.
///
/// Used when no endpoint is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, request: &ContactRequest) -> ContactResult<ContactReceipt> {
        tracing::debug!(subject = %request.subject, delay_ms = self.delay.as_millis() as u64, "simulating contact submission");
        tokio::time::sleep(self.delay).await;
        Ok(ContactReceipt::default())
    }

    fn describe(&self) -> String {
        format!("simulated ({} ms)", self.delay.as_millis())
    }
}

/// POSTs the request as JSON to an HTTP endpoint.
///
/// 2xx is success (an optional `{"id": ..}` body becomes the receipt), any
/// other status is a server error carrying the response body, and requests
/// that get no response are network errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url, timeout: Duration) -> ContactResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("paktech-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn send(&self, request: &ContactRequest) -> ContactResult<ContactReceipt> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("contact endpoint response status: {}", status);

        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(ContactReceipt::default());
            }
            return Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
                tracing::warn!("unrecognised contact receipt body: {}", e);
                ContactReceipt::default()
            }));
        }

        let message = match body.trim() {
            "" => status.canonical_reason().unwrap_or("unknown status").to_string(),
            text => text.to_string(),
        };
        Err(ContactError::Server {
            status: status.as_u16(),
            message,
        })
    }

    fn describe(&self) -> String {
        format!("http ({})", self.endpoint)
    }
}
