//! Tabbed contact form (`POST /api/send-contact-email`)

use serde::Deserialize;

use super::html::{capitalize, field, message_block};
use super::validate::{optional, require, scalar, ValidationError};
use super::{Form, FormKind};
use crate::config::Mailboxes;
use crate::email::Email;

/// Raw request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Submitter display name
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    /// Submitter address
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    /// Phone number
    #[serde(default, deserialize_with = "scalar")]
    pub phone: Option<String>,
    /// Subject typed by the submitter
    #[serde(default, deserialize_with = "scalar")]
    pub subject: Option<String>,
    /// Dropdown selection
    #[serde(default, deserialize_with = "scalar")]
    pub enquiry_type: Option<String>,
    /// Free-text message
    #[serde(default, deserialize_with = "scalar")]
    pub message: Option<String>,
    /// Form tab the submission came from
    #[serde(default, deserialize_with = "scalar")]
    pub active_tab: Option<String>,
}

/// Validated contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Submitter display name
    pub name: String,
    /// Submitter address
    pub email: String,
    /// Free-text message
    pub message: String,
    /// Subject typed by the submitter
    pub subject: String,
    /// Dropdown selection
    pub enquiry_type: String,
    /// Form tab the submission came from
    pub active_tab: String,
    /// Phone number, when given
    pub phone: Option<String>,
}

impl Form for ContactRequest {
    type Submission = Contact;

    const KIND: FormKind = FormKind::Contact;

    fn validate(self) -> Result<Contact, ValidationError> {
        let [name, email, message, subject, enquiry_type, active_tab] = require([
            ("name", self.name),
            ("email", self.email),
            ("message", self.message),
            ("subject", self.subject),
            ("enquiryType", self.enquiry_type),
            ("activeTab", self.active_tab),
        ])?;

        Ok(Contact {
            name,
            email,
            message,
            subject,
            enquiry_type,
            active_tab,
            phone: optional(self.phone),
        })
    }

    fn compose(contact: &Contact, mailboxes: &Mailboxes) -> Vec<Email> {
        let tab_label = capitalize(&contact.active_tab);
        let subject = format!(
            "New {tab_label} Inquiry: \"{}\" from {}",
            contact.subject, contact.name
        );

        let mut body = format!("<h2>New Contact Form Submission ({tab_label})</h2>\n");
        body.push_str(&field("Name", &contact.name));
        body.push_str(&field("Email", &contact.email));
        if let Some(phone) = &contact.phone {
            body.push_str(&field("Phone", phone));
        }
        body.push_str(&field("Selected Tab", &tab_label));
        body.push_str(&field("Enquiry Type (Dropdown)", &contact.enquiry_type));
        body.push_str(&field("User's Subject (Input Field)", &contact.subject));
        body.push_str(&message_block(&contact.message));
        body.push_str("<hr><p>This email was sent from the new contact form on your website.</p>");

        vec![Email::new()
            .from(&mailboxes.sender)
            .to(&mailboxes.admin)
            .reply_to(&contact.email)
            .subject(&subject)
            .html(&body)]
    }

    fn confirmation(_contact: &Contact) -> String {
        "Email sent successfully! We will get back to you shortly.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::mailboxes;

    fn request() -> ContactRequest {
        ContactRequest {
            name: Some("Grace".to_string()),
            email: Some("grace@example.com".to_string()),
            subject: Some("Compilers".to_string()),
            enquiry_type: Some("partnership".to_string()),
            message: Some("Hi\nthere".to_string()),
            active_tab: Some("business".to_string()),
            ..ContactRequest::default()
        }
    }

    #[test]
    fn test_compose() {
        let contact = request().validate().unwrap();
        let emails = ContactRequest::compose(&contact, &mailboxes());
        assert_eq!(emails.len(), 1);

        let email = &emails[0];
        assert_eq!(email.to, vec!["admin@acme.test"]);
        assert_eq!(email.reply_to.as_deref(), Some("grace@example.com"));
        assert_eq!(
            email.subject.as_deref(),
            Some("New Business Inquiry: \"Compilers\" from Grace")
        );

        let html = email.html.as_deref().unwrap();
        assert!(html.starts_with("<h2>New Contact Form Submission (Business)</h2>"));
        assert!(html.contains("<p><strong>Selected Tab:</strong> Business</p>"));
        assert!(html.contains("<p><strong>Enquiry Type (Dropdown):</strong> partnership</p>"));
        assert!(html.contains("<p>Hi<br>there</p>"));
        assert!(!html.contains("Phone"));
    }

    #[test]
    fn test_phone_included_when_present() {
        let mut req = request();
        req.phone = Some("+1 555 0100".to_string());

        let contact = req.validate().unwrap();
        let html = ContactRequest::compose(&contact, &mailboxes())
            .remove(0)
            .html
            .unwrap();
        assert!(html.contains("<p><strong>Phone:</strong> +1 555 0100</p>"));
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request();
        req.subject = None;
        req.active_tab = Some(String::new());

        let err = req.validate().unwrap_err();
        assert_eq!(err.missing, vec!["subject", "activeTab"]);
    }
}
