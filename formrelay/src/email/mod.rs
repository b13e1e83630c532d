//! Outbound mail transport
//!
//! This module wraps the single relay account every endpoint sends through:
//! - [`Email`]: the message value handed to a transport
//! - [`EmailSender`]: one delivery attempt per call, no retry
//! - Backends: [`SmtpBackend`] (lettre) and [`ConsoleBackend`] (development)
//!
//! # Example
//!
//! ```rust,no_run
//! use formrelay::config::RelayConfig;
//! use formrelay::email;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RelayConfig::default();
//! let sender = email::sender_from_config(&config)?;
//!
//! // Logged, never fatal
//! email::verify_transport(sender.as_ref()).await;
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod error;
mod sender;

use std::sync::Arc;

use tracing::{info, warn};

pub use backend::{console::ConsoleBackend, smtp::SmtpBackend};
pub use builder::Email;
pub use error::EmailError;
pub use sender::{EmailSender, SendReceipt};

#[cfg(test)]
pub use sender::MockEmailSender;

use crate::config::{MailBackend, RelayConfig};

/// Build the process-wide sender selected by `mail.backend`
///
/// # Errors
///
/// Returns `EmailError::Config` if the SMTP transport cannot be constructed
pub fn sender_from_config(config: &RelayConfig) -> Result<Arc<dyn EmailSender>, EmailError> {
    let sender: Arc<dyn EmailSender> = match config.mail.backend {
        MailBackend::Smtp => Arc::new(SmtpBackend::new(&config.smtp)?),
        MailBackend::Console => Arc::new(ConsoleBackend::verbose()),
    };
    Ok(sender)
}

/// Run the startup connectivity check and log its outcome
///
/// A failure is only a warning: the server keeps accepting requests and
/// delivery errors surface when an endpoint actually sends.
pub async fn verify_transport(sender: &dyn EmailSender) {
    match sender.verify().await {
        Ok(()) => info!("Mail transport is ready to send emails"),
        Err(e) => warn!(
            error = %e,
            response_code = e.response_code(),
            "Mail transport verification failed; requests will still be served"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_transport_tolerates_failure() {
        let mut mock = MockEmailSender::new();
        mock.expect_verify()
            .times(1)
            .returning(|| Err(EmailError::delivery("connection refused")));

        verify_transport(&mock).await;
    }

    #[test]
    fn test_sender_from_config_console() {
        let mut config = RelayConfig::default();
        config.mail.backend = MailBackend::Console;

        assert!(sender_from_config(&config).is_ok());
    }
}
