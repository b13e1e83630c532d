//! Original website contact form (`POST /api/send-email`)

use serde::Deserialize;

use super::html::{capitalize, field, message_block};
use super::validate::{optional, require, scalar, ValidationError};
use super::{Form, FormKind};
use crate::config::Mailboxes;
use crate::email::Email;

/// Raw request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContactRequest {
    /// Submitter display name
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    /// Submitter address
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    /// Company name
    #[serde(default, deserialize_with = "scalar")]
    pub company: Option<String>,
    /// Phone number
    #[serde(default, deserialize_with = "scalar")]
    pub phone: Option<String>,
    /// Free-text message
    #[serde(default, deserialize_with = "scalar")]
    pub message: Option<String>,
    /// Subject line, shown for `general` inquiries
    #[serde(default, deserialize_with = "scalar")]
    pub subject: Option<String>,
    /// Service of interest, shown for `business` and `support` inquiries
    #[serde(default, deserialize_with = "scalar")]
    pub service: Option<String>,
    /// `general`, `business`, `support` or any other label
    #[serde(default, deserialize_with = "scalar")]
    pub inquiry_type: Option<String>,
}

/// Validated legacy contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyContact {
    /// Submitter display name
    pub name: String,
    /// Submitter address
    pub email: String,
    /// Free-text message
    pub message: String,
    /// Inquiry discriminator
    pub inquiry_type: String,
    /// Company name, when given
    pub company: Option<String>,
    /// Phone number, when given
    pub phone: Option<String>,
    /// Subject line, when given
    pub subject: Option<String>,
    /// Service of interest, when given
    pub service: Option<String>,
}

impl LegacyContact {
    /// Inquiry-specific line: the subject for `general`, the service otherwise
    fn detail_line(&self) -> Option<String> {
        match (self.inquiry_type.as_str(), &self.subject, &self.service) {
            ("general", Some(subject), _) => Some(field("Subject", subject)),
            ("business", _, Some(service)) => {
                Some(field("Partnership Type / Service of Interest", service))
            }
            ("support", _, Some(service)) => Some(field("Issue Category / Service", service)),
            _ => None,
        }
    }
}

impl Form for LegacyContactRequest {
    type Submission = LegacyContact;

    const KIND: FormKind = FormKind::LegacyContact;

    fn validate(self) -> Result<LegacyContact, ValidationError> {
        let [name, email, message, inquiry_type] = require([
            ("name", self.name),
            ("email", self.email),
            ("message", self.message),
            ("inquiryType", self.inquiry_type),
        ])?;

        Ok(LegacyContact {
            name,
            email,
            message,
            inquiry_type,
            company: optional(self.company),
            phone: optional(self.phone),
            subject: optional(self.subject),
            service: optional(self.service),
        })
    }

    fn compose(contact: &LegacyContact, mailboxes: &Mailboxes) -> Vec<Email> {
        let subject = format!(
            "New Contact Form Submission - {}",
            capitalize(&contact.inquiry_type)
        );

        let mut body = String::from("<h2>New Contact Form Submission</h2>\n");
        body.push_str(&field("Inquiry Type", &contact.inquiry_type));
        body.push_str(&field("Name", &contact.name));
        body.push_str(&field("Email", &contact.email));
        if let Some(company) = &contact.company {
            body.push_str(&field("Company", company));
        }
        if let Some(phone) = &contact.phone {
            body.push_str(&field("Phone", phone));
        }
        if let Some(line) = contact.detail_line() {
            body.push_str(&line);
        }
        body.push_str(&message_block(&contact.message));
        body.push_str(
            "<hr><p>This email was sent from the contact form on your website (Legacy Endpoint).</p>",
        );

        vec![Email::new()
            .from(&mailboxes.sender)
            .to(&mailboxes.admin)
            .reply_to(&contact.email)
            .subject(&subject)
            .html(&body)]
    }

    fn confirmation(_contact: &LegacyContact) -> String {
        "Email sent successfully!".to_string()
    }
}
