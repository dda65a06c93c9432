//! JSON success responses.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// 200 with `Content-Type: application/json` and the compact encoding of `data`.
pub fn ok_json<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
