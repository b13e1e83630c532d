//! Email builder with fluent API
//!
//! Message builders in [`crate::forms`] assemble every outbound message
//! through this type before handing it to an [`EmailSender`](super::EmailSender).

use serde::{Deserialize, Serialize};

use super::EmailError;

/// An email message
///
/// ```rust
/// use formrelay::email::Email;
///
/// let email = Email::new()
///     .to("admin@example.com")
///     .from("\"Acme\" <relay@example.com>")
///     .reply_to("visitor@example.com")
///     .subject("New Contact Form Submission - General")
///     .html("<p>Hello</p>");
///
/// assert!(email.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Email recipients (To)
    pub to: Vec<String>,

    /// Email sender (From)
    pub from: Option<String>,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// Email subject
    pub subject: Option<String>,

    /// HTML body
    pub html: Option<String>,
}

impl Email {
    /// Create a new empty email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient (To)
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_string());
        self
    }

    /// Set the sender (From)
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the reply-to address
    #[must_use]
    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }

    /// Set the email subject
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    /// First recipient, used for log correlation
    #[must_use]
    pub fn primary_recipient(&self) -> Option<&str> {
        self.to.first().map(String::as_str)
    }

    /// Validate the email
    ///
    /// Checks that every part a transport needs is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - No recipients, or only empty recipients
    /// - No sender
    /// - No subject, or an empty one
    /// - No HTML body
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_empty() || self.to.iter().any(String::is_empty) {
            return Err(EmailError::NoRecipients);
        }

        if self.from.as_deref().is_none_or(str::is_empty) {
            return Err(EmailError::NoSender);
        }

        if self.subject.as_deref().is_none_or(str::is_empty) {
            return Err(EmailError::NoSubject);
        }

        if self.html.is_none() {
            return Err(EmailError::NoContent);
        }

        Ok(())
    }
}
