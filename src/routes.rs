//! Route table and cross-origin policy.

use crate::error::ConfigError;
use crate::handlers::{add_product, get_category, get_product, health, list_categories, list_products, raw_query};
use crate::state::AppState;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowCredentials, AllowOrigin, CorsLayer};

/// GET /health, product and category reads, GET /query, POST /add/product.
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(get_category))
        .route("/query", get(raw_query))
        .route("/add/product", post(add_product))
        .with_state(state)
}

/// Credentialed CORS for exactly one origin. Other origins get no allow headers.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
        var: "FRONTEND_HOST",
        reason: e.to_string(),
    })?;
    let allowed = origin.clone();
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(AllowCredentials::predicate(move |request_origin, _| {
            *request_origin == allowed
        }))
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ]))
}

/// Full application: routes behind the CORS layer.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    catalog_routes(state).layer(cors)
}
