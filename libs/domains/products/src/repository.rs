use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// Implementations keep products in insertion order; every listing method
/// returns records in that order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a freshly generated, unique id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List products, optionally restricted to an exact category
    async fn list(&self, category: Option<String>) -> ProductResult<Vec<Product>>;

    /// Products whose name contains `needle`, ignoring case
    async fn search_by_name(&self, needle: &str) -> ProductResult<Vec<Product>>;

    /// Replace every field of an existing product, keeping its id and
    /// position. Returns `None` if no product has that id.
    async fn update(&self, id: &str, input: ProductInput) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: &str) -> ProductResult<bool>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}
