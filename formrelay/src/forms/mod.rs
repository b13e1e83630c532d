//! Form submissions and the messages built from them
//!
//! Every endpoint is described by a [`Form`]: a raw JSON request type that
//! validates into a submission, and a pure builder turning that submission
//! into the emails to send. The generic handler in
//! [`handlers`](crate::handlers) drives each form through the same steps.
//!
//! | Form | Request | `to` | `reply_to` |
//! |---|---|---|---|
//! | legacy contact | [`LegacyContactRequest`] | admin | submitter |
//! | contact | [`ContactRequest`] | admin | submitter |
//! | demo request | [`DemoRequest`] | admin | submitter |
//! | welcome | [`WelcomeRequest`] | submitter | support |
//! | newsletter | [`SubscribeRequest`] | admin, then subscriber | subscriber, then support |
//!
//! Submitted values are interpolated into HTML bodies without escaping.

mod contact;
mod demo;
mod html;
mod legacy_contact;
mod newsletter;
mod validate;
mod welcome;

use serde::de::DeserializeOwned;

pub use contact::{Contact, ContactRequest};
pub use demo::{Demo, DemoRequest};
pub use legacy_contact::{LegacyContact, LegacyContactRequest};
pub use newsletter::{SubscribeRequest, Subscription};
pub use validate::{optional, require, scalar, ValidationError};
pub use welcome::{Welcome, WelcomeRequest};

use crate::config::Mailboxes;
use crate::email::Email;

/// The five form endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Original contact form
    LegacyContact,
    /// Tabbed contact form
    Contact,
    /// CTA demo request
    DemoRequest,
    /// Sign-up welcome trigger
    Welcome,
    /// Newsletter subscription
    Newsletter,
}

impl FormKind {
    /// Route the form is served on
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::LegacyContact => "/api/send-email",
            Self::Contact => "/api/send-contact-email",
            Self::DemoRequest => "/api/request-demo",
            Self::Welcome => "/api/send-welcome-email",
            Self::Newsletter => "/api/subscribe",
        }
    }

    /// Short name used in log events
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LegacyContact => "legacy_contact",
            Self::Contact => "contact",
            Self::DemoRequest => "demo_request",
            Self::Welcome => "welcome",
            Self::Newsletter => "newsletter",
        }
    }

    /// 400 response text when required fields are missing
    #[must_use]
    pub const fn rejection_message(self) -> &'static str {
        match self {
            Self::LegacyContact => "Name, email, message, and inquiryType are required.",
            Self::Contact => {
                "Missing required fields: name, email, subject, enquiryType, message, and activeTab are required."
            }
            Self::DemoRequest => "All fields are required.",
            Self::Welcome => "User name and email are required for welcome email.",
            Self::Newsletter => "Email is required to subscribe.",
        }
    }

    /// 500 response text when delivery fails
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::LegacyContact => "Failed to send email. Server error.",
            Self::Contact => "Failed to send email. Please try again later.",
            Self::DemoRequest => "Failed to send demo request.",
            Self::Welcome => "Failed to send welcome email.",
            Self::Newsletter => "Failed to process subscription.",
        }
    }
}

/// Descriptor for one form endpoint
///
/// Implemented on the raw request type. `validate` is the only way to obtain
/// a `Submission`, so builders never see unchecked input.
pub trait Form: DeserializeOwned + Send + 'static {
    /// Validated shape handed to the builder
    type Submission: Send + Sync;

    /// Which endpoint this form is served on
    const KIND: FormKind;

    /// Check required fields and unwrap them
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming every missing required field
    fn validate(self) -> Result<Self::Submission, ValidationError>;

    /// Build every message this submission produces
    fn compose(submission: &Self::Submission, mailboxes: &Mailboxes) -> Vec<Email>;

    /// 200 response text
    fn confirmation(submission: &Self::Submission) -> String;
}
