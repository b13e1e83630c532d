//! Email error types

use thiserror::Error;

/// Errors that can occur when building or delivering an email
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients
    #[error("email must have at least one recipient")]
    NoRecipients,

    /// Email has no sender
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body content
    #[error("email must have an HTML body")]
    NoContent,

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The transport library refused to assemble the message
    #[error("failed to build email message: {0}")]
    Build(String),

    /// The SMTP server rejected the message or could not be reached
    #[error("{message}")]
    Delivery {
        /// Upstream response text
        message: String,
        /// SMTP reply code, when the server answered
        code: Option<String>,
    },

    /// Email configuration error
    #[error("email configuration error: {0}")]
    Config(String),
}

impl EmailError {
    /// Create a delivery error without an SMTP reply code
    #[must_use]
    pub fn delivery<T: Into<String>>(msg: T) -> Self {
        Self::Delivery {
            message: msg.into(),
            code: None,
        }
    }

    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// SMTP reply code attached to a delivery failure
    #[must_use]
    pub fn response_code(&self) -> Option<&str> {
        match self {
            Self::Delivery { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

impl From<lettre::transport::smtp::Error> for EmailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Delivery {
            code: err.status().map(|code| code.to_string()),
            message: err.to_string(),
        }
    }
}
