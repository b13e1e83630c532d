//! Email sender trait abstraction
//!
//! This module defines the `EmailSender` trait that every transport backend
//! implements. Handlers only ever see `Arc<dyn EmailSender>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Email, EmailError};

/// Identifier handed back for a message the transport accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// `Message-ID` header value of the delivered message
    pub message_id: String,
}

impl SendReceipt {
    /// Create a receipt for the given message id
    #[must_use]
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// Trait for sending emails
///
/// Each call to [`send`](EmailSender::send) is exactly one delivery attempt.
/// Implementations never retry.
///
/// # Examples
///
/// ```rust
/// use formrelay::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = ConsoleBackend::new();
///
/// let email = Email::new()
///     .to("admin@example.com")
///     .from("relay@example.com")
///     .subject("Hello!")
///     .html("<p>Hello, World!</p>");
///
/// let receipt = sender.send(email).await?;
/// println!("sent {}", receipt.message_id);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is invalid or the transport rejects it
    async fn send(&self, email: Email) -> Result<SendReceipt, EmailError>;

    /// Check that the transport is reachable with the configured credentials
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Delivery` if the server cannot be reached or
    /// refuses the connection
    async fn verify(&self) -> Result<(), EmailError>;
}
