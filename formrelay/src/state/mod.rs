//! Application state shared by all handlers
//!
//! Built once at startup and cloned into each request. Nothing in it is
//! mutated after construction.

use std::sync::Arc;

use crate::config::{Mailboxes, RelayConfig};
use crate::email::{self, EmailError, EmailSender};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    sender: Arc<dyn EmailSender>,
    mailboxes: Arc<Mailboxes>,
}

impl AppState {
    /// Create state from an existing sender and resolved mailboxes
    #[must_use]
    pub fn new(sender: Arc<dyn EmailSender>, mailboxes: Mailboxes) -> Self {
        Self {
            sender,
            mailboxes: Arc::new(mailboxes),
        }
    }

    /// Create state with the transport selected by configuration
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Config` if the SMTP transport cannot be constructed
    pub fn from_config(config: &RelayConfig) -> Result<Self, EmailError> {
        Ok(Self::new(
            email::sender_from_config(config)?,
            config.mailboxes(),
        ))
    }

    /// Outbound transport
    #[must_use]
    pub fn sender(&self) -> &dyn EmailSender {
        self.sender.as_ref()
    }

    /// Shared handle to the outbound transport
    #[must_use]
    pub fn sender_handle(&self) -> Arc<dyn EmailSender> {
        Arc::clone(&self.sender)
    }

    /// Resolved sender, admin and support addresses
    #[must_use]
    pub fn mailboxes(&self) -> &Mailboxes {
        &self.mailboxes
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("mailboxes", &self.mailboxes)
            .finish_non_exhaustive()
    }
}
