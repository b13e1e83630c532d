//! Newsletter subscription (`POST /api/subscribe`)
//!
//! Produces two messages: a notification to the admin inbox and a welcome
//! message to the subscriber.

use serde::Deserialize;

use super::html::field;
use super::validate::{optional, require, scalar, ValidationError};
use super::{Form, FormKind};
use crate::config::Mailboxes;
use crate::email::Email;

/// Raw request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    /// Subscriber address
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    /// Subscriber display name
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
}

/// Validated subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    /// Subscriber address
    pub email: String,
    /// Subscriber display name, when given
    pub name: Option<String>,
}

impl Subscription {
    fn notification(&self, mailboxes: &Mailboxes) -> Email {
        let mut body = String::from("<h2>New Newsletter Subscriber</h2>\n");
        body.push_str(&field("Email", &self.email));
        if let Some(name) = &self.name {
            body.push_str(&field("Name", name));
        }
        body.push_str("<hr><p>This email was sent from the newsletter signup on your website.</p>");

        Email::new()
            .from(&mailboxes.sender)
            .to(&mailboxes.admin)
            .reply_to(&self.email)
            .subject(&format!("New Newsletter Subscriber: {}", self.email))
            .html(&body)
    }

    fn welcome(&self, mailboxes: &Mailboxes) -> Email {
        let app = &mailboxes.app_name;
        let greeting = self
            .name
            .as_deref()
            .map_or_else(|| "Hello!".to_string(), |name| format!("Hello, {name}!"));
        let body = format!(
            "<h1>{greeting}</h1>\n\
             <p>Thank you for subscribing to the {app} newsletter.</p>\n\
             <p>You'll hear from us whenever there's something worth sharing.</p>\n\
             <p>Best regards,<br>The {app} Team</p>"
        );

        Email::new()
            .from(&mailboxes.sender)
            .to(&self.email)
            .reply_to(&mailboxes.support)
            .subject(&format!("Welcome to the {app} Newsletter!"))
            .html(&body)
    }
}

impl Form for SubscribeRequest {
    type Submission = Subscription;

    const KIND: FormKind = FormKind::Newsletter;

    fn validate(self) -> Result<Subscription, ValidationError> {
        let [email] = require([("email", self.email)])?;

        Ok(Subscription {
            email,
            name: optional(self.name),
        })
    }

    fn compose(subscription: &Subscription, mailboxes: &Mailboxes) -> Vec<Email> {
        vec![
            subscription.notification(mailboxes),
            subscription.welcome(mailboxes),
        ]
    }

    fn confirmation(subscription: &Subscription) -> String {
        format!(
            "Subscribed successfully! A welcome email is on its way to {}.",
            subscription.email
        )
    }
}
