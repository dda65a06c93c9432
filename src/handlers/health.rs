//! Liveness probe. Never touches the database.

use axum::{http::header, response::IntoResponse};

pub const HEALTH_BODY: &str = r#"{"alive": true}"#;

/// GET /health
pub async fn health() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], HEALTH_BODY)
}
