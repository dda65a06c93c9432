//! Persistence gateway: every read and write the HTTP layer needs, one query (or batch) each.

use crate::error::AppError;
use crate::model::{Category, NewProduct, Product};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::{BTreeSet, HashMap};

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// All products with their category attached.
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    /// One product by key, category attached. `AppError::NotFound` if absent.
    async fn get_product(&self, id: i32) -> Result<Product, AppError>;

    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;

    /// `AppError::NotFound` if absent.
    async fn get_category(&self, id: i32) -> Result<Category, AppError>;

    /// Insert; storage assigns the id. Returns the stored row.
    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError>;

    /// Unconditional `SELECT * FROM products`; no category loading.
    async fn raw_list_products(&self) -> Result<Vec<Product>, AppError>;
}

const PRODUCT_COLUMNS: &str = "id, name, description, image, price, inventory, tags, category_id";

/// Postgres-backed gateway. The pool is shared by all in-flight requests.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Batch-load the categories referenced by `products` and attach them.
    async fn preload_categories(&self, products: &mut [Product]) -> Result<(), AppError> {
        let ids: Vec<i32> = products
            .iter()
            .filter_map(|p| p.category_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if ids.is_empty() {
            return Ok(());
        }
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;
        attach_categories(products, categories);
        Ok(())
    }
}

/// Set each product's `category` from `categories` by `category_id`. Dangling references stay unset.
pub fn attach_categories(products: &mut [Product], categories: Vec<Category>) {
    let by_id: HashMap<i32, Category> = categories.into_iter().map(|c| (c.id, c)).collect();
    for p in products.iter_mut() {
        p.category = p.category_id.and_then(|id| by_id.get(&id).cloned());
    }
}

#[async_trait]
impl CatalogGateway for PgCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let mut products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        self.preload_categories(&mut products).await?;
        Ok(products)
    }

    async fn get_product(&self, id: i32) -> Result<Product, AppError> {
        let mut product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        self.preload_categories(std::slice::from_mut(&mut product)).await?;
        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_category(&self, id: i32) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("category {}", id)))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, image, price, inventory, tags, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.price)
        .bind(product.inventory)
        .bind(&product.tags)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;
        tracing::info!(id = row.id, "product created");
        Ok(row)
    }

    async fn raw_list_products(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, Product>("SELECT * FROM products")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
