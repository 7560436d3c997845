//! Contact form record and local validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};
use crate::i18n::Locale;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Translation key of the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.name",
            ContactField::Email => "contact.email",
            ContactField::Subject => "contact.subject",
            ContactField::Message => "contact.message",
        }
    }

    /// Translation key of the field placeholder
    pub fn placeholder_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.name_placeholder",
            ContactField::Email => "contact.email_placeholder",
            ContactField::Subject => "contact.subject_placeholder",
            ContactField::Message => "contact.message_placeholder",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values currently typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Copy of the form with one field replaced.
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all().iter().all(|f| self.get(*f).is_empty())
    }

    /// Check every field and build the request that would be sent.
    ///
    /// Values are trimmed; the first failing field (in display order) is
    /// reported.
    pub fn validate(&self, locale: Locale) -> ContactResult<ContactRequest> {
        for field in ContactField::all() {
            if self.get(*field).trim().is_empty() {
                return Err(ContactError::validation(*field, "required"));
            }
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::validation(
                ContactField::Email,
                "not a valid address",
            ));
        }

        let message = self.message.trim();
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactError::validation(
                ContactField::Message,
                format!("longer than {} characters", MAX_MESSAGE_CHARS),
            ));
        }

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: message.to_string(),
            locale: locale.code().to_string(),
        })
    }
}

/// Single `@`, non-empty local part, dotted domain, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Body of a contact submission.
///
/// Sent as JSON to the configured endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Locale the visitor was browsing in
    pub locale: String,
}

/// What a successful submission returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Ticket or message id assigned by the endpoint, if any
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with(ContactField::Name, "  Ayesha Khan ")
            .with(ContactField::Email, "ayesha@example.com")
            .with(ContactField::Subject, "New store")
            .with(ContactField::Message, "We need an online store.")
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let req = filled().validate(Locale::English).unwrap();
        assert_eq!(req.name, "Ayesha Khan");
        assert_eq!(req.email, "ayesha@example.com");
        assert_eq!(req.locale, "en");
    }

    #[test]
    fn missing_field_reported_in_display_order() {
        let form = filled()
            .with(ContactField::Subject, "   ")
            .with(ContactField::Message, "");
        let err = form.validate(Locale::English).unwrap_err();
        assert_eq!(
            err,
            ContactError::Validation {
                field: ContactField::Subject,
                reason: "required".to_string()
            }
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last+tag@mail.example.pk"));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@@example.com"));
        assert!(!is_plausible_email("a@example"));
        assert!(!is_plausible_email("a@.example.com"));
        assert!(!is_plausible_email("a@example..com"));
        assert!(!is_plausible_email("a b@example.com"));
    }

    #[test]
    fn overlong_message_rejected() {
        let form = filled().with(ContactField::Message, "x".repeat(MAX_MESSAGE_CHARS + 1));
        let err = form.validate(Locale::English).unwrap_err();
        assert!(matches!(
            err,
            ContactError::Validation {
                field: ContactField::Message,
                ..
            }
        ));
    }

    #[test]
    fn request_serializes_as_flat_json() {
        let req = filled().validate(Locale::Urdu).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["subject"], "New store");
        assert_eq!(json["locale"], "ur");
    }

    #[test]
    fn empty_form() {
        assert!(ContactForm::default().is_empty());
        assert!(!filled().is_empty());
    }
}
