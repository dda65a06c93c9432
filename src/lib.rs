//! Catalog API: product and category REST service over PostgreSQL.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use gateway::{CatalogGateway, PgCatalog};
pub use model::{Category, NewProduct, Product};
pub use response::ok_json;
pub use routes::{app, catalog_routes, cors_layer};
pub use state::AppState;
