//! Request-scoped errors and their HTTP mapping
//!
//! Handlers return `Result<_, SubmissionError>`; only this module decides
//! status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::email::EmailError;
use crate::forms::{FormKind, ValidationError};

/// JSON body of every form endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable outcome
    pub message: String,

    /// Transport error text, on delivery failure only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageBody {
    /// Body without error detail
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

/// Why a submission did not end in `delivered`
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Required fields were missing (400)
    #[error("{}: {source}", .kind.name())]
    Rejected {
        /// Endpoint that rejected the submission
        kind: FormKind,
        /// The missing fields
        #[source]
        source: ValidationError,
    },

    /// The body was not a JSON object (400)
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// At least one message could not be delivered (500)
    #[error("{}: {source}", .kind.name())]
    DeliveryFailed {
        /// Endpoint whose delivery failed
        kind: FormKind,
        /// First transport error encountered
        #[source]
        source: EmailError,
    },
}

impl SubmissionError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Rejected { .. } | Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::DeliveryFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> MessageBody {
        match self {
            Self::Rejected { kind, .. } => MessageBody::new(kind.rejection_message()),
            Self::Malformed(detail) => MessageBody::new(format!("Invalid request body: {detail}")),
            Self::DeliveryFailed { kind, source } => MessageBody {
                message: kind.failure_message().to_string(),
                error: Some(source.to_string()),
            },
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
