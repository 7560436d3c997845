//! Submission lifecycle of one contact form instance.

use crate::contact::form::{ContactForm, ContactReceipt, ContactRequest};
use crate::error::{ContactError, ContactResult};
use crate::i18n::Locale;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A request is in flight; the submit control is busy
    Sending,
    Sent(ContactReceipt),
    Failed(ContactError),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

/// Form record plus submission status, updated as a value.
///
/// ```text
/// Idle/Sent/Failed --begin(valid)--> Sending --finish(Ok)--> Sent (form cleared)
///                  --begin(invalid)--> Failed                --finish(Err)--> Failed (form kept)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl ContactSession {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status.is_sending()
    }

    /// Replace the form record, leaving the status alone.
    pub fn with_form(self, form: ContactForm) -> Self {
        Self { form, ..self }
    }

    /// Validate and mark the session as sending.
    ///
    /// Returns the request to hand to a transport, or `None` when validation
    /// failed or a request is already in flight.
    pub fn begin(self, locale: Locale) -> (Self, Option<ContactRequest>) {
        if self.is_sending() {
            tracing::debug!("submit ignored, request already in flight");
            return (self, None);
        }
        match self.form.validate(locale) {
            Ok(request) => (
                Self {
                    status: SubmissionStatus::Sending,
                    ..self
                },
                Some(request),
            ),
            Err(err) => {
                tracing::warn!("contact form not sent: {}", err);
                (
                    Self {
                        status: SubmissionStatus::Failed(err),
                        ..self
                    },
                    None,
                )
            }
        }
    }

    /// Record the transport outcome. Success clears the form.
    pub fn finish(self, outcome: ContactResult<ContactReceipt>) -> Self {
        match outcome {
            Ok(receipt) => Self {
                form: ContactForm::default(),
                status: SubmissionStatus::Sent(receipt),
            },
            Err(err) => Self {
                status: SubmissionStatus::Failed(err),
                ..self
            },
        }
    }

    /// Back to idle after a notification has been dismissed.
    pub fn acknowledge(self) -> Self {
        if self.is_sending() {
            return self;
        }
        Self {
            status: SubmissionStatus::Idle,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactField;

    fn complete() -> ContactForm {
        ContactForm::default()
            .with(ContactField::Name, "Bilal")
            .with(ContactField::Email, "bilal@example.com")
            .with(ContactField::Subject, "App")
            .with(ContactField::Message, "Hello")
    }

    #[test]
    fn begin_with_valid_form_sends() {
        let (session, request) = ContactSession::new(complete()).begin(Locale::English);
        assert!(session.is_sending());
        assert_eq!(request.map(|r| r.name), Some("Bilal".to_string()));
    }

    #[test]
    fn begin_twice_does_not_duplicate() {
        let (session, _) = ContactSession::new(complete()).begin(Locale::English);
        let (session, second) = session.begin(Locale::English);
        assert!(session.is_sending());
        assert!(second.is_none());
    }

    #[test]
    fn invalid_form_fails_without_request() {
        let form = complete().with(ContactField::Email, "nope");
        let (session, request) = ContactSession::new(form.clone()).begin(Locale::English);
        assert!(request.is_none());
        assert!(matches!(session.status, SubmissionStatus::Failed(ContactError::Validation { .. })));
        assert_eq!(session.form, form);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn invalid_form_is_logged_as_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let form = complete().with(ContactField::Email, "nope");
            let _ = ContactSession::new(form).begin(Locale::English);
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("contact form not sent"), "{output}");
        assert!(output.contains("Invalid email"), "{output}");
    }

    #[test]
    fn success_clears_form() {
        let (session, _) = ContactSession::new(complete()).begin(Locale::English);
        let session = session.finish(Ok(ContactReceipt::default()));
        assert!(!session.is_sending());
        assert!(session.form.is_empty());
        assert_eq!(session.status, SubmissionStatus::Sent(ContactReceipt::default()));
    }

    #[test]
    fn failure_keeps_form() {
        let (session, _) = ContactSession::new(complete()).begin(Locale::English);
        let session = session.finish(Err(ContactError::Network("reset".into())));
        assert!(!session.is_sending());
        assert_eq!(session.form, complete());
        assert!(matches!(session.status, SubmissionStatus::Failed(ContactError::Network(_))));
    }

    #[test]
    fn acknowledge_returns_to_idle() {
        let session = ContactSession::default()
            .finish(Ok(ContactReceipt::default()))
            .acknowledge();
        assert_eq!(session.status, SubmissionStatus::Idle);
    }
}
