use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Default page for list requests
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size for list requests
pub const DEFAULT_LIMIT: u64 = 10;

/// Message reported when a product payload has an empty, missing or
/// mistyped field
pub const FIELDS_REQUIRED_MESSAGE: &str = axum_helpers::extractors::INVALID_FIELDS_MESSAGE;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier (UUID v4 text), never changes
    #[schema(example = "6f1c0d9a-3c5e-4d0b-9b7e-2a9c1f0e8d11")]
    pub id: String,
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, strictly positive
    #[schema(example = 9.99)]
    pub price: f64,
    /// Free-form category label
    #[schema(example = "tools")]
    pub category: String,
    /// Whether the product is currently available
    pub in_stock: bool,
}

impl Product {
    /// Build a product from client input under the given id.
    pub fn from_input(id: impl Into<String>, input: ProductInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Fresh random identifier for a new product.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Client payload for creating or replacing a product.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1, message = "All fields are required and must be of correct type"))]
    #[schema(example = "Widget")]
    pub name: String,
    #[validate(length(min = 1, message = "All fields are required and must be of correct type"))]
    #[schema(example = "A very useful widget")]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    #[schema(example = 9.99)]
    pub price: f64,
    #[validate(length(min = 1, message = "All fields are required and must be of correct type"))]
    #[schema(example = "tools")]
    pub category: String,
    pub in_stock: bool,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Exact category match; empty means no filter
    pub category: Option<String>,
    /// 1-based page number (default 1)
    #[validate(range(min = 1, message = "Page must be a positive integer"))]
    pub page: Option<u64>,
    /// Page size (default 10)
    #[validate(range(min = 1, message = "Limit must be a positive integer"))]
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Category filter, with an empty value treated as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Query parameters for searching products by name
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name (required)
    pub name: Option<String>,
}

/// One page of a (possibly filtered) product listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductPage {
    /// Number of products matching the filter, across all pages
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub products: Vec<Product>,
}

/// Aggregate counts over the whole store
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    /// Product count per category, keys in sorted order
    pub categories: BTreeMap<String, usize>,
}

impl ProductStats {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(ProductStats::default(), |mut stats, product| {
                stats.total_products += 1;
                if product.in_stock {
                    stats.in_stock += 1;
                } else {
                    stats.out_of_stock += 1;
                }
                *stats
                    .categories
                    .entry(product.category.clone())
                    .or_insert(0) += 1;
                stats
            })
    }
}
