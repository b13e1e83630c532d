//! Console backend for development
//!
//! Logs emails instead of sending them, so the endpoints can be exercised
//! without SMTP credentials.

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::email::{Email, EmailError, EmailSender, SendReceipt};

/// Console email backend for development
///
/// ```rust
/// use formrelay::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = ConsoleBackend::verbose();
///
/// let email = Email::new()
///     .to("admin@example.com")
///     .from("relay@example.com")
///     .subject("Hello!")
///     .html("<p>Hello, World!</p>");
///
/// backend.send(email).await?; // logged, not sent
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    /// Whether to log the message body as well
    verbose: bool,
}

impl ConsoleBackend {
    /// Create a new console backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verbose console backend that logs full email content
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<SendReceipt, EmailError> {
        email.validate()?;

        let from = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        let message_id = format!("<{}@console>", Uuid::new_v4());

        info!(
            message_id = %message_id,
            from = %from,
            to = ?email.to,
            reply_to = ?email.reply_to,
            subject = %subject,
            "Console email sent"
        );

        if self.verbose {
            debug!(
                html = email.html.as_deref().unwrap_or_default(),
                "Email body"
            );
        }

        Ok(SendReceipt::new(message_id))
    }

    async fn verify(&self) -> Result<(), EmailError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_backend_send() {
        let backend = ConsoleBackend::new();

        let email = Email::new()
            .to("admin@example.com")
            .from("relay@example.com")
            .subject("Test")
            .html("<p>Hello</p>");

        let receipt = backend.send(email).await.unwrap();
        assert!(receipt.message_id.ends_with("@console>"));
    }

    #[tokio::test]
    async fn test_console_backend_rejects_invalid_email() {
        let backend = ConsoleBackend::verbose();

        let email = Email::new()
            .from("relay@example.com")
            .subject("Test")
            .html("<p>Hello</p>");

        assert!(matches!(
            backend.send(email).await,
            Err(EmailError::NoRecipients)
        ));
    }

    #[tokio::test]
    async fn test_console_backend_verify() {
        assert!(ConsoleBackend::new().verify().await.is_ok());
    }
}
