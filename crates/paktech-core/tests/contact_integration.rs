//! Contact submission integration tests
//!
//! Drives the session through real transports: the simulated delay on a
//! paused clock and the HTTP transport against a mock server.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use paktech_core::{
    build_transport, submit, ContactConfig, ContactError, ContactField, ContactForm,
    ContactReceipt, ContactRequest, ContactResult, ContactSession, ContactTransport,
    HttpTransport, Locale, SimulatedTransport, SubmissionStatus,
};
use url::Url;

fn complete_form() -> ContactForm {
    ContactForm::default()
        .with(ContactField::Name, "Sarah Mitchell")
        .with(ContactField::Email, "sarah@northwind.example")
        .with(ContactField::Subject, "SEO retainer")
        .with(ContactField::Message, "Could we talk about the growth plan?")
}

fn http_transport(server: &MockServer, path: &str) -> HttpTransport {
    let endpoint = Url::parse(&server.url(path)).unwrap();
    HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap()
}

/// Transport that always fails with the same error
struct FailingTransport {
    error: ContactError,
}

impl FailingTransport {
    fn new(error: ContactError) -> Self {
        Self { error }
    }
}

#[async_trait::async_trait]
impl ContactTransport for FailingTransport {
    async fn send(&self, _request: &ContactRequest) -> ContactResult<ContactReceipt> {
        Err(self.error.clone())
    }

    fn describe(&self) -> String {
        format!("failing ({})", self.error)
    }
}

/// Run one begin/submit/finish cycle, checking the sending flag on the way
async fn run_cycle(session: ContactSession, transport: &dyn ContactTransport) -> ContactSession {
    let (session, request) = session.begin(Locale::English);
    let request = request.expect("form should be valid");
    assert!(session.is_sending());

    let outcome = submit(transport, &request).await;
    session.finish(outcome)
}

// ============================================================================
// Simulated Transport
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_simulated_submit_clears_form() {
    let transport = SimulatedTransport::new(Duration::from_millis(1500));
    let session = ContactSession::new(complete_form());

    let started = tokio::time::Instant::now();
    let session = run_cycle(session, &transport).await;

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(!session.is_sending());
    assert!(session.form.is_empty());
    assert!(matches!(session.status, SubmissionStatus::Sent(_)));
}

#[tokio::test]
async fn test_failing_transport_keeps_form() {
    let transport = FailingTransport::new(ContactError::Network("offline".to_string()));
    let session = run_cycle(ContactSession::new(complete_form()), &transport).await;

    assert!(!session.is_sending());
    assert_eq!(session.form, complete_form());
    assert_eq!(
        session.status,
        SubmissionStatus::Failed(ContactError::Network("offline".to_string()))
    );
}

// ============================================================================
// HTTP Transport
// ============================================================================

#[tokio::test]
async fn test_http_success_with_receipt() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/contact")
                .json_body_partial(r#"{"name": "Sarah Mitchell", "locale": "en"}"#);
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "id": "msg-42" }));
        })
        .await;

    let transport = http_transport(&server, "/contact");
    let session = run_cycle(ContactSession::new(complete_form()), &transport).await;

    mock.assert_async().await;
    assert!(session.form.is_empty());
    match session.status {
        SubmissionStatus::Sent(receipt) => assert_eq!(receipt.id.as_deref(), Some("msg-42")),
        other => panic!("expected Sent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_empty_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/contact");
            then.status(204);
        })
        .await;

    let transport = http_transport(&server, "/contact");
    let request = complete_form().validate(Locale::English).unwrap();
    let receipt = submit(&transport, &request).await.unwrap();
    assert_eq!(receipt.id, None);
}

#[tokio::test]
async fn test_http_client_error_is_user_fixable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/contact");
            then.status(422).body("email domain rejected");
        })
        .await;

    let transport = http_transport(&server, "/contact");
    let session = run_cycle(ContactSession::new(complete_form()), &transport).await;

    match &session.status {
        SubmissionStatus::Failed(err) => {
            assert_eq!(
                err,
                &ContactError::Server {
                    status: 422,
                    message: "email domain rejected".to_string()
                }
            );
            assert!(err.is_user_fixable());
            assert_eq!(err.notice_key(), "contact.error_rejected");
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(session.form, complete_form());
}

#[tokio::test]
async fn test_http_server_error_uses_reason_when_body_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/contact");
            then.status(503);
        })
        .await;

    let transport = http_transport(&server, "/contact");
    let request = complete_form().validate(Locale::English).unwrap();
    let err = submit(&transport, &request).await.unwrap_err();
    assert_eq!(
        err,
        ContactError::Server {
            status: 503,
            message: "Service Unavailable".to_string()
        }
    );
    assert_eq!(err.notice_key(), "contact.error_server");
}

#[tokio::test]
async fn test_http_unreachable_is_network_error() {
    // Port 9 (discard) on localhost is not expected to accept connections
    let endpoint = Url::parse("http://127.0.0.1:9/contact").unwrap();
    let transport = HttpTransport::new(endpoint, Duration::from_secs(2)).unwrap();
    let request = complete_form().validate(Locale::English).unwrap();

    let err = submit(&transport, &request).await.unwrap_err();
    assert!(matches!(err, ContactError::Network(_)), "got {:?}", err);
    assert!(!err.is_user_fixable());
}

// ============================================================================
// Transport Selection
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_build_transport_without_endpoint_simulates() {
    let config = ContactConfig {
        endpoint: None,
        timeout_secs: 1,
        simulated_delay_ms: 10,
    };
    let transport: Arc<dyn ContactTransport> = build_transport(&config).unwrap();
    assert_eq!(transport.describe(), "simulated (10 ms)");

    let request = complete_form().validate(Locale::Urdu).unwrap();
    assert!(submit(transport.as_ref(), &request).await.is_ok());
}

#[test]
fn test_build_transport_with_endpoint_uses_http() {
    let config = ContactConfig {
        endpoint: Some(Url::parse("https://api.example.com/contact").unwrap()),
        ..ContactConfig::default()
    };
    let transport = build_transport(&config).unwrap();
    assert_eq!(transport.describe(), "http (https://api.example.com/contact)");
}
