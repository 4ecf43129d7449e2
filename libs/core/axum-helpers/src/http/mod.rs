//! HTTP middleware module.
//!
//! - request logging (first pipeline stage)
//! - CORS configuration
//! - security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, request_logger, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(request_logger))
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&origins)?);
//! ```

pub mod cors;
pub mod logging;
pub mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use logging::request_logger;
pub use security::security_headers;
