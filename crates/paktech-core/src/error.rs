//! Error types for the PakTechnology site

use thiserror::Error;

use crate::contact::ContactField;

/// Failures of a contact form submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed local validation; nothing was sent
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: ContactField,
        reason: String,
    },

    /// The request never got a response (connect failure, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ContactError {
    pub(crate) fn validation(field: ContactField, reason: impl Into<String>) -> Self {
        ContactError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the submitter can fix this by editing the form
    pub fn is_user_fixable(&self) -> bool {
        match self {
            ContactError::Validation { .. } => true,
            ContactError::Server { status, .. } => (400..500).contains(status),
            ContactError::Network(_) => false,
        }
    }

    /// Translation key of the notification shown for this failure
    pub fn notice_key(&self) -> &'static str {
        match self {
            ContactError::Validation { .. } => "contact.error_validation",
            ContactError::Network(_) => "contact.error_network",
            ContactError::Server { .. } if self.is_user_fixable() => "contact.error_rejected",
            ContactError::Server { .. } => "contact.error_server",
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ContactError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ContactError::Network(err.to_string()),
        }
    }
}

/// Result type alias using ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Failures while assembling the site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Contact endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Locale code has no catalog
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Result type alias using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::validation(ContactField::Email, "missing @");
        assert_eq!(format!("{}", err), "Invalid email: missing @");

        let err = ContactError::Server {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(format!("{}", err), "Server error (503): unavailable");
    }

    #[test]
    fn test_user_fixable() {
        assert!(ContactError::validation(ContactField::Name, "required").is_user_fixable());
        assert!(ContactError::Server {
            status: 422,
            message: String::new()
        }
        .is_user_fixable());
        assert!(!ContactError::Server {
            status: 500,
            message: String::new()
        }
        .is_user_fixable());
        assert!(!ContactError::Network("timeout".to_string()).is_user_fixable());
    }

    #[test]
    fn test_rejection_and_outage_notices_differ() {
        let rejected = ContactError::Server {
            status: 422,
            message: String::new(),
        };
        let outage = ContactError::Server {
            status: 503,
            message: String::new(),
        };
        assert_eq!(rejected.notice_key(), "contact.error_rejected");
        assert_eq!(outage.notice_key(), "contact.error_server");
        assert_eq!(
            ContactError::Network("reset".to_string()).notice_key(),
            "contact.error_network"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
