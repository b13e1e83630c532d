//! Testing utilities for formrelay
//!
//! - [`RecordingEmailSender`] - in-memory transport with failure injection
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use formrelay::config::RelayConfig;
//! use formrelay::state::AppState;
//! use formrelay::testing::RecordingEmailSender;
//!
//! let sender = RecordingEmailSender::new();
//! let state = AppState::new(Arc::new(sender.clone()), RelayConfig::default().mailboxes());
//! let app = formrelay::router(state);
//! ```

pub mod email;

pub use email::RecordingEmailSender;
