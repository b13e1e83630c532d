//! Recording email sender for tests
//!
//! Captures every delivery attempt in memory and can be told to reject
//! messages addressed to specific recipients.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::email::{Email, EmailError, EmailSender, SendReceipt};

/// In-memory sender for handler tests
///
/// # Examples
///
/// ```rust
/// use formrelay::email::{Email, EmailSender};
/// use formrelay::testing::RecordingEmailSender;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = RecordingEmailSender::new().failing_for("bounce@example.com");
///
/// let email = Email::new()
///     .to("admin@example.com")
///     .from("relay@example.com")
///     .subject("Test")
///     .html("<p>Hello</p>");
///
/// sender.send(email).await?;
///
/// assert_eq!(sender.sent_count(), 1);
/// assert!(sender.was_sent_to("admin@example.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<Email>>>,
    attempts: Arc<Mutex<usize>>,
    failing: Arc<HashSet<String>>,
    unreachable: bool,
}

impl RecordingEmailSender {
    /// Create a sender that accepts every valid email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject messages addressed to `address` with a 550 reply
    #[must_use]
    pub fn failing_for(mut self, address: &str) -> Self {
        Arc::make_mut(&mut self.failing).insert(address.to_string());
        self
    }

    /// Fail `verify` as if the server could not be reached
    #[must_use]
    pub const fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Number of calls to `send`, including failed ones
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    /// Number of emails delivered
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// All delivered emails, in completion order
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    /// First delivered email addressed to `address`
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_to(&self, address: &str) -> Option<Email> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .find(|email| email.to.iter().any(|to| to == address))
            .cloned()
    }

    /// Check if an email was delivered to `address`
    #[must_use]
    pub fn was_sent_to(&self, address: &str) -> bool {
        self.sent_to(address).is_some()
    }

    /// Get the last delivered email
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: Email) -> Result<SendReceipt, EmailError> {
        *self.attempts.lock().unwrap() += 1;

        email.validate()?;

        if let Some(address) = email.to.iter().find(|to| self.failing.contains(*to)) {
            return Err(EmailError::Delivery {
                message: format!("Mailbox unavailable: {address}"),
                code: Some("550".to_string()),
            });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email);
        Ok(SendReceipt::new(format!("<{}@recording>", sent.len())))
    }

    async fn verify(&self) -> Result<(), EmailError> {
        if self.unreachable {
            Err(EmailError::delivery("Connection refused"))
        } else {
            Ok(())
        }
    }
}
