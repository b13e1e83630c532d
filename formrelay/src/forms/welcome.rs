//! Sign-up welcome trigger (`POST /api/send-welcome-email`)

use serde::Deserialize;

use super::validate::{require, scalar, ValidationError};
use super::{Form, FormKind};
use crate::config::Mailboxes;
use crate::email::Email;

/// Raw request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeRequest {
    /// New user's display name
    #[serde(default, deserialize_with = "scalar")]
    pub user_name: Option<String>,
    /// New user's address
    #[serde(default, deserialize_with = "scalar")]
    pub user_email: Option<String>,
}

/// Validated welcome trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    /// New user's display name
    pub user_name: String,
    /// New user's address
    pub user_email: String,
}

impl Form for WelcomeRequest {
    type Submission = Welcome;

    const KIND: FormKind = FormKind::Welcome;

    fn validate(self) -> Result<Welcome, ValidationError> {
        let [user_name, user_email] = require([
            ("userName", self.user_name),
            ("userEmail", self.user_email),
        ])?;

        Ok(Welcome {
            user_name,
            user_email,
        })
    }

    fn compose(welcome: &Welcome, mailboxes: &Mailboxes) -> Vec<Email> {
        let app = &mailboxes.app_name;
        let subject = format!("Welcome to {app}, {}!", welcome.user_name);
        let body = format!(
            "<h1>Welcome, {}!</h1>\n\
             <p>Thank you for signing up for {app}.</p>\n\
             <p>We're excited to have you on board.</p>\n\
             <p>Best regards,<br>The {app} Team</p>",
            welcome.user_name
        );

        vec![Email::new()
            .from(&mailboxes.sender)
            .to(&welcome.user_email)
            .reply_to(&mailboxes.support)
            .subject(&subject)
            .html(&body)]
    }

    fn confirmation(welcome: &Welcome) -> String {
        format!("Welcome email sent successfully to {}!", welcome.user_email)
    }
}
