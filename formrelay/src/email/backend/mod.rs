//! Email backend implementations
//!
//! - **SMTP**: send through the configured relay account (production)
//! - **Console**: log messages instead of sending them (development)

pub mod console;
pub mod smtp;
