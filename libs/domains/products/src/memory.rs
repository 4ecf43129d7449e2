//! In-memory product store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Process-local store backed by an ordered `Vec`.
///
/// Reads share the lock, mutations take it exclusively. Contents live as
/// long as the repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `products`, kept in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let mut id = Product::generate_id();
        while products.iter().any(|p| p.id == id) {
            id = Product::generate_id();
        }

        let product = Product::from_input(id, input);
        products.push(product.clone());
        debug!(id = %product.id, total = products.len(), "product stored");

        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, category: Option<String>) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(match category {
            Some(category) => products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
            None => products.clone(),
        })
    }

    async fn search_by_name(&self, needle: &str) -> ProductResult<Vec<Product>> {
        let needle = needle.to_lowercase();
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, input: ProductInput) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(slot) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        *slot = Product::from_input(id, input);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}
