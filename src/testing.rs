//! In-memory gateway for router tests.

use crate::error::AppError;
use crate::gateway::{attach_categories, CatalogGateway};
use crate::model::{Category, NewProduct, Product};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryCatalog {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
    /// When set, every call fails the way an unreachable database would.
    down: AtomicBool,
}

impl MemoryCatalog {
    pub fn seeded() -> Self {
        let catalog = Self::default();
        catalog.add_category(1, "Phone");
        catalog.add_category(2, "Video Game Console");
        for (name, category_id) in [
            ("iPhone", Some(1)),
            ("Pixel Pro", Some(1)),
            ("Playstation", Some(2)),
            ("Xbox", Some(2)),
            ("Orphan", Some(9)),
        ] {
            let np = NewProduct {
                name: name.into(),
                description: format!("{} description", name),
                price: 100.0,
                inventory: 5,
                category_id,
                ..NewProduct::default()
            };
            catalog.insert(np);
        }
        catalog
    }

    pub fn add_category(&self, id: i32, name: &str) {
        self.categories.lock().unwrap().push(Category {
            id,
            name: name.into(),
            description: format!("{} description", name),
        });
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn insert(&self, np: NewProduct) -> Product {
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = np.into_product(id);
        products.push(product.clone());
        product
    }
}

#[async_trait]
impl CatalogGateway for MemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.check()?;
        let mut products = self.products.lock().unwrap().clone();
        attach_categories(&mut products, self.categories.lock().unwrap().clone());
        Ok(products)
    }

    async fn get_product(&self, id: i32) -> Result<Product, AppError> {
        self.check()?;
        let mut product = self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        attach_categories(std::slice::from_mut(&mut product), self.categories.lock().unwrap().clone());
        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.check()?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn get_category(&self, id: i32) -> Result<Category, AppError> {
        self.check()?;
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("category {}", id)))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError> {
        self.check()?;
        Ok(self.insert(product))
    }

    async fn raw_list_products(&self) -> Result<Vec<Product>, AppError> {
        self.check()?;
        Ok(self.products.lock().unwrap().clone())
    }
}
