//! Catalog handlers: product and category reads, raw product query, product create.

use crate::error::AppError;
use crate::model::NewProduct;
use crate::response::ok_json;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;

/// Path ids that are not integers cannot match a row.
fn parse_id(kind: &str, id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("{} {}", kind, id_str)))
}

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.catalog.list_products().await?;
    Ok(ok_json(products))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("product", &id_str)?;
    let product = state.catalog.get_product(id).await?;
    Ok(ok_json(product))
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = state.catalog.list_categories().await?;
    Ok(ok_json(categories))
}

/// GET /categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("category", &id_str)?;
    let category = state.catalog.get_category(id).await?;
    Ok(ok_json(category))
}

/// GET /query. Any failure is reported as 404; the cause is only logged.
pub async fn raw_query(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.catalog.raw_list_products().await.map_err(|e| {
        tracing::error!(error = %e, "raw product query failed");
        AppError::NotFound("raw product query".into())
    })?;
    Ok(ok_json(products))
}

/// POST /add/product. The body is decoded regardless of content type; it must be a JSON object.
pub async fn add_product(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    let new_product: NewProduct =
        serde_json::from_value(value).map_err(|e| AppError::BadRequest(format!("invalid product: {}", e)))?;
    let product = state.catalog.create_product(new_product).await?;
    Ok(ok_json(product))
}
