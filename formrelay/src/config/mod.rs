//! Configuration management for formrelay
//!
//! Configuration is loaded once at startup and never reloaded. Sources, from
//! highest to lowest priority:
//!
//! 1. `FORMRELAY_` prefixed environment variables (`__` separates sections)
//! 2. Conventional deployment variables (`EMAIL_USER`, `EMAIL_PASS`,
//!    `EMAIL_RECEIVER`, `SUPPORT_EMAIL`, `APP_NAME`, `PORT`, `SMTP_HOST`,
//!    `SMTP_PORT`)
//! 3. The file passed with `--config`, or `./config.toml` when present
//! 4. Hardcoded defaults
//!
//! Environment variable format: `FORMRELAY_SECTION__FIELD_NAME`, for example
//! `FORMRELAY_SMTP__SECURITY=starttls`.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3001
//!
//! [smtp]
//! host = "smtpout.secureserver.net"
//! port = 465
//! security = "tls"
//! username = "hello@example.com"
//! password = "secret"
//! timeout_secs = 60
//!
//! [mail]
//! backend = "smtp"
//! app_name = "Acme Widgets"
//! receiver = "sales@example.com"
//! support_email = "support@example.com"
//!
//! [log]
//! level = "info"
//! format = "json"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deployment variables understood without the `FORMRELAY_` prefix
const LEGACY_ENV: [(&str, &str); 8] = [
    ("EMAIL_USER", "smtp.username"),
    ("EMAIL_PASS", "smtp.password"),
    ("SMTP_HOST", "smtp.host"),
    ("SMTP_PORT", "smtp.port"),
    ("EMAIL_RECEIVER", "mail.receiver"),
    ("SUPPORT_EMAIL", "mail.support_email"),
    ("APP_NAME", "mail.app_name"),
    ("PORT", "server.port"),
];

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Defaults could not be serialized as the base layer
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// An explicitly requested configuration file does not exist
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A source could not be parsed or merged
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    /// Values parsed but are unusable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Listening port
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

/// Connection security for the SMTP relay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Implicit TLS from the first byte (port 465)
    #[default]
    Tls,
    /// Plaintext connection upgraded with STARTTLS (port 587)
    StartTls,
    /// No encryption; local relays and test servers only
    None,
}

/// Outbound SMTP account
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// Connection security mode
    pub security: SmtpSecurity,

    /// Account login, also used as the sender address
    pub username: String,

    /// Account secret
    pub password: String,

    /// Per-command timeout applied by the transport
    pub timeout_secs: u64,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtpout.secureserver.net".to_string(),
            port: 465,
            security: SmtpSecurity::Tls,
            username: String::new(),
            password: String::new(),
            timeout_secs: 60,
        }
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("security", &self.security)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Which transport handles outbound messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailBackend {
    /// Deliver through the SMTP account
    #[default]
    Smtp,
    /// Log messages instead of sending them
    Console,
}

/// Addressing used when composing messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Transport selection
    pub backend: MailBackend,

    /// Display name on the sender mailbox and in welcome templates
    pub app_name: String,

    /// Admin inbox for submissions; defaults to the SMTP account
    pub receiver: Option<String>,

    /// Reply-To for messages sent to submitters; defaults to the SMTP account
    pub support_email: Option<String>,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            backend: MailBackend::Smtp,
            app_name: "Your Application".to_string(),
            receiver: None,
            support_email: None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: if cfg!(debug_assertions) {
                LogFormat::Pretty
            } else {
                LogFormat::Json
            },
        }
    }
}

/// Complete formrelay configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,

    /// SMTP account
    #[serde(default)]
    pub smtp: SmtpSettings,

    /// Message addressing
    #[serde(default)]
    pub mail: MailSettings,

    /// Logging
    #[serde(default)]
    pub log: LogSettings,
}

impl RelayConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is given but does not exist
    /// - A file or environment value cannot be parsed into the expected type
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_config = PathBuf::from("./config.toml");
                if local_config.exists() {
                    figment = figment.merge(Toml::file(local_config));
                }
            }
        }

        figment = figment
            .merge(Env::raw().filter_map(|key| legacy_path(key.as_str()).map(Into::into)))
            .merge(Env::prefixed("FORMRELAY_").split("__"));

        figment.extract().map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first unusable value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server port must be greater than 0".to_string(),
            ));
        }

        if self.mail.backend == MailBackend::Smtp {
            if self.smtp.host.trim().is_empty() {
                return Err(ConfigError::Invalid("smtp host must be set".to_string()));
            }
            if self.smtp.username.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "smtp username (EMAIL_USER) must be set".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Resolve the mailboxes every message builder addresses
    #[must_use]
    pub fn mailboxes(&self) -> Mailboxes {
        let account = if self.smtp.username.is_empty() {
            "noreply@localhost".to_string()
        } else {
            self.smtp.username.clone()
        };

        Mailboxes {
            sender: format!("\"{}\" <{account}>", self.mail.app_name),
            admin: non_empty(self.mail.receiver.as_deref()).unwrap_or(&account).to_string(),
            support: non_empty(self.mail.support_email.as_deref())
                .unwrap_or(&account)
                .to_string(),
            app_name: self.mail.app_name.clone(),
            account,
        }
    }
}

/// Addresses resolved once from configuration
///
/// Shared read-only by all requests through [`AppState`](crate::state::AppState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailboxes {
    /// `From` mailbox with the application display name
    pub sender: String,

    /// Bare account address, the `From` of demo requests
    pub account: String,

    /// Inbox receiving submissions and subscriber notifications
    pub admin: String,

    /// Reply-To on messages addressed to submitters
    pub support: String,

    /// Display name used in welcome templates
    pub app_name: String,
}

fn legacy_path(var: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(var))
        .map(|(_, path)| *path)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
