//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

pub type Products = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: Products,
}

impl AppState {
    /// State with an empty product store.
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            products: ProductService::new(InMemoryProductRepository::new()),
        }
    }
}
