//! Call-to-action demo request (`POST /api/request-demo`)
//!
//! Sent from the bare account address, without the application display name.

use serde::Deserialize;

use super::html::field;
use super::validate::{require, scalar, ValidationError};
use super::{Form, FormKind};
use crate::config::Mailboxes;
use crate::email::Email;

/// Raw request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoRequest {
    /// Requester display name
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    /// Requester address
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    /// Manufacturing sector
    #[serde(default, deserialize_with = "scalar")]
    pub sector: Option<String>,
}

/// Validated demo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    /// Requester display name
    pub name: String,
    /// Requester address
    pub email: String,
    /// Manufacturing sector
    pub sector: String,
}

impl Form for DemoRequest {
    type Submission = Demo;

    const KIND: FormKind = FormKind::DemoRequest;

    fn validate(self) -> Result<Demo, ValidationError> {
        let [name, email, sector] = require([
            ("name", self.name),
            ("email", self.email),
            ("sector", self.sector),
        ])?;

        Ok(Demo {
            name,
            email,
            sector,
        })
    }

    fn compose(demo: &Demo, mailboxes: &Mailboxes) -> Vec<Email> {
        let subject = format!("New Demo Request from {} - Manufacturing Solution", demo.name);

        let mut body = field("Name", &demo.name);
        body.push_str(&field("Email", &demo.email));
        body.push_str(&field("Manufacturing Sector", &demo.sector));
        body.push_str("<p>This is a demo request from your website's CTA section.</p>");

        vec![Email::new()
            .from(&mailboxes.account)
            .to(&mailboxes.admin)
            .reply_to(&demo.email)
            .subject(&subject)
            .html(&body)]
    }

    fn confirmation(_demo: &Demo) -> String {
        "Demo request sent successfully!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::mailboxes;

    #[test]
    fn test_compose() {
        let demo = DemoRequest {
            name: Some("Linus".to_string()),
            email: Some("linus@example.com".to_string()),
            sector: Some("Automotive".to_string()),
        }
        .validate()
        .unwrap();

        let emails = DemoRequest::compose(&demo, &mailboxes());
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to, vec!["admin@acme.test"]);
        assert_eq!(emails[0].from.as_deref(), Some("relay@acme.test"));
        assert_eq!(emails[0].reply_to.as_deref(), Some("linus@example.com"));
        assert_eq!(
            emails[0].subject.as_deref(),
            Some("New Demo Request from Linus - Manufacturing Solution")
        );
        assert!(emails[0]
            .html
            .as_deref()
            .unwrap()
            .contains("<p><strong>Manufacturing Sector:</strong> Automotive</p>"));
    }

    #[test]
    fn test_missing_sector() {
        let err = DemoRequest {
            name: Some("Linus".to_string()),
            email: Some("linus@example.com".to_string()),
            sector: None,
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.missing, vec!["sector"]);
    }
}
