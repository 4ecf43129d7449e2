//! Product Service - Business logic layer

use axum_helpers::validation_message;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{ListQuery, Product, ProductInput, ProductPage, ProductStats};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, pagination and aggregation, and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;

        let product = self.repository.create(input).await?;
        info!(id = %product.id, "Product created");
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// List one page of products, optionally filtered by category
    ///
    /// `total` counts every product matching the filter; the page is the
    /// slice `[(page - 1) * limit, page * limit)` of the filtered sequence,
    /// clamped to its length.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductPage> {
        validate(&query)?;

        let page = query.page();
        let limit = query.limit();
        let filtered = self
            .repository
            .list(query.category().map(str::to_owned))
            .await?;

        let total = filtered.len();
        let start = usize::try_from(page.saturating_sub(1).saturating_mul(limit))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        let products = filtered.into_iter().skip(start).take(take).collect();

        Ok(ProductPage {
            total,
            page,
            limit,
            products,
        })
    }

    /// Search products by name (case-insensitive substring)
    #[instrument(skip(self))]
    pub async fn search_products(&self, name: Option<&str>) -> ProductResult<Vec<Product>> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ProductError::Validation("Name parameter is required".to_string()))?;

        self.repository.search_by_name(name).await
    }

    /// Replace an existing product; the id never changes
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        validate(&input)?;

        let product = self
            .repository
            .update(id, input)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        info!(id = %product.id, "Product updated");
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        info!(id, "Product deleted");
        Ok(())
    }

    /// Aggregate counts over every stored product
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<ProductStats> {
        let products = self.repository.list(None).await?;
        Ok(ProductStats::from_products(&products))
    }

    /// Number of stored products
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn validate(value: &impl Validate) -> ProductResult<()> {
    value
        .validate()
        .map_err(|e| ProductError::Validation(validation_message(&e)))
}
