//! SMTP backend for sending emails
//!
//! Uses the `lettre` crate to send emails via the configured relay account.
//! The transport is built once at startup and shared by every request;
//! lettre pools the underlying connections.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;
use uuid::Uuid;

use crate::config::{SmtpSecurity, SmtpSettings};
use crate::email::{Email, EmailError, EmailSender, SendReceipt};

/// SMTP email backend
///
/// # Examples
///
/// ```rust,no_run
/// use formrelay::config::SmtpSettings;
/// use formrelay::email::{Email, EmailSender, SmtpBackend};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = SmtpBackend::new(&SmtpSettings::default())?;
///
/// let email = Email::new()
///     .to("admin@example.com")
///     .from("relay@example.com")
///     .subject("Hello!")
///     .html("<p>Hello, World!</p>");
///
/// backend.send(email).await?;
/// # Ok(())
/// # }
/// ```
pub struct SmtpBackend {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpBackend {
    /// Create a new SMTP backend from the relay settings
    ///
    /// Does not open a connection; see [`EmailSender::verify`].
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Config` if TLS parameters cannot be built for the host
    pub fn new(settings: &SmtpSettings) -> Result<Self, EmailError> {
        let builder = match settings.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| EmailError::config(format!("TLS setup for {}: {e}", settings.host)))?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host).map_err(
                    |e| EmailError::config(format!("STARTTLS setup for {}: {e}", settings.host)),
                )?
            }
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            }
        };

        let mut builder = builder
            .port(settings.port)
            .timeout(Some(Duration::from_secs(settings.timeout_secs)));

        if !settings.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// Build lettre Message from Email
    ///
    /// Returns the message together with the generated `Message-ID`.
    fn build_message(email: &Email) -> Result<(Message, String), EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let from = parse_mailbox(from_addr)?;
        let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

        let mut builder = Message::builder()
            .from(from)
            .message_id(Some(message_id.clone()));

        for to_addr in &email.to {
            builder = builder.to(parse_mailbox(to_addr)?);
        }

        if let Some(reply_to_addr) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to_addr)?);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        let html = email.html.as_ref().ok_or(EmailError::NoContent)?;
        let message = builder
            .header(header::ContentType::TEXT_HTML)
            .body(html.clone())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        Ok((message, message_id))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse()
        .map_err(|_| EmailError::InvalidAddress(address.to_string()))
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<SendReceipt, EmailError> {
        let (message, message_id) = Self::build_message(&email)?;

        let response = self.transport.send(message).await?;
        debug!(
            message_id = %message_id,
            code = %response.code(),
            "SMTP server accepted message"
        );

        Ok(SendReceipt::new(message_id))
    }

    async fn verify(&self) -> Result<(), EmailError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(EmailError::delivery(
                "SMTP server did not accept the connection test",
            ))
        }
    }
}
