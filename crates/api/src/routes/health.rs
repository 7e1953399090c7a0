//! Health check endpoint.

use axum::Json;
use probe::HealthSnapshot;

/// GET /health — returns a fresh process/OS health snapshot.
#[tracing::instrument]
pub async fn get() -> Json<HealthSnapshot> {
    Json(HealthSnapshot::capture())
}
