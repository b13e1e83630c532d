//! formrelay: relay website form submissions as email
//!
//! Five JSON endpoints accept contact forms, demo requests, welcome triggers
//! and newsletter signups, and deliver them through one outbound SMTP
//! account. Each request is validated, turned into one or two messages,
//! sent once, and answered with the outcome. Nothing is stored, queued or
//! retried.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use formrelay::config::RelayConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RelayConfig::load(None)?;
//!     config.validate()?;
//!     formrelay::server::serve(config).await
//! }
//! ```
//!
//! # Endpoints
//!
//! | Route | Form |
//! |---|---|
//! | `POST /api/send-email` | [`forms::LegacyContactRequest`] |
//! | `POST /api/send-contact-email` | [`forms::ContactRequest`] |
//! | `POST /api/request-demo` | [`forms::DemoRequest`] |
//! | `POST /api/send-welcome-email` | [`forms::WelcomeRequest`] |
//! | `POST /api/subscribe` | [`forms::SubscribeRequest`] |
//! | `GET /health` | liveness |

pub mod config;
pub mod email;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;
pub mod testing;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use forms::{
    ContactRequest, DemoRequest, Form, LegacyContactRequest, SubscribeRequest, WelcomeRequest,
};
use handlers::{health, submit};
use state::AppState;

/// Build the application router
///
/// Cross-origin requests are accepted from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(LegacyContactRequest::KIND.path(), post(submit::<LegacyContactRequest>))
        .route(ContactRequest::KIND.path(), post(submit::<ContactRequest>))
        .route(DemoRequest::KIND.path(), post(submit::<DemoRequest>))
        .route(WelcomeRequest::KIND.path(), post(submit::<WelcomeRequest>))
        .route(SubscribeRequest::KIND.path(), post(submit::<SubscribeRequest>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
