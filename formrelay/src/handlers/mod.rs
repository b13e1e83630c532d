//! HTTP handlers
//!
//! Every form endpoint is one instantiation of [`submit`]:
//!
//! `received → validating → {rejected | building → sending → {delivered | delivery_failed}}`
//!
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use formrelay::forms::DemoRequest;
//! use formrelay::handlers::submit;
//! use formrelay::state::AppState;
//!
//! fn routes(state: AppState) -> Router {
//!     Router::new()
//!         .route("/api/request-demo", post(submit::<DemoRequest>))
//!         .with_state(state)
//! }
//! ```

mod health;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use futures_util::future::join_all;
use tracing::{error, info, warn};

pub use health::{health, HealthBody};

use crate::email::{Email, EmailError, EmailSender, SendReceipt};
use crate::error::{MessageBody, SubmissionError};
use crate::forms::Form;
use crate::state::AppState;

/// Validate, build, send and report one form submission
///
/// # Errors
///
/// - `SubmissionError::Malformed` when the body is not a JSON object
/// - `SubmissionError::Rejected` when required fields are missing; nothing is sent
/// - `SubmissionError::DeliveryFailed` when any message could not be delivered
pub async fn submit<F: Form>(
    State(state): State<AppState>,
    payload: Result<Json<F>, JsonRejection>,
) -> Result<Json<MessageBody>, SubmissionError> {
    let form = F::KIND.name();

    let Json(request) = payload.map_err(|rejection| {
        let detail = rejection.body_text();
        warn!(form, error = %detail, "Malformed submission body");
        SubmissionError::Malformed(detail)
    })?;

    let submission = request.validate().map_err(|source| {
        warn!(form, missing = ?source.missing, "Submission rejected");
        SubmissionError::Rejected {
            kind: F::KIND,
            source,
        }
    })?;

    let emails = F::compose(&submission, state.mailboxes());
    deliver(state.sender(), emails)
        .await
        .map_err(|source| SubmissionError::DeliveryFailed {
            kind: F::KIND,
            source,
        })?;

    Ok(Json(MessageBody::new(F::confirmation(&submission))))
}

/// Send every message concurrently and wait for all of them
///
/// Sends are not cancelled when a sibling fails. The first error, in message
/// order, is returned.
async fn deliver(
    sender: &dyn EmailSender,
    emails: Vec<Email>,
) -> Result<Vec<SendReceipt>, EmailError> {
    let sends = emails.into_iter().map(|email| async move {
        let to = email.primary_recipient().unwrap_or_default().to_string();
        match sender.send(email).await {
            Ok(receipt) => {
                info!(to = %to, message_id = %receipt.message_id, "Email sent successfully");
                Ok(receipt)
            }
            Err(e) => {
                error!(
                    to = %to,
                    error = %e,
                    response_code = e.response_code(),
                    "Error sending email"
                );
                Err(e)
            }
        }
    });

    join_all(sends).await.into_iter().collect()
}
