//! Shared-secret API key authentication.
//!
//! Requests under the protected path prefix must carry the configured key in
//! the `x-api-key` header; everything else passes through untouched.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, api_key_auth};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//! let app = Router::new()
//!     .nest("/api", api_routes)
//!     .layer(axum::middleware::from_fn_with_state(config, api_key_auth));
//! ```

pub mod config;
pub mod middleware;

pub use config::{API_KEY_HEADER, ApiKeyConfig, DEFAULT_API_KEY};
pub use middleware::api_key_auth;
