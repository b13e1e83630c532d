//! Liveness endpoint
//!
//! Reports that the process is serving requests. It does not contact the
//! mail transport.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    /// Always `"ok"` while the process is up
    pub status: String,
    /// Crate version
    pub version: String,
}

/// `GET /health`
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
