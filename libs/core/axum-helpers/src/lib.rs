//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: static API key authentication for routes under `/api`
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers, request logging)
//! - **[`errors`]**: the application error type and its single translation
//!   into `{status, message}` responses
//! - **[`extractors`]**: JSON body, query and path extractors that run
//!   `validator` rules and reject with [`AppError::Validation`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::auth::ApiKeyConfig;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(
//!         Router::new(),
//!         Router::new(),
//!         ApiKeyConfig::default(),
//!         &config,
//!     )?;
//!
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{API_KEY_HEADER, ApiKeyConfig, api_key_auth};

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer, request_logger, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, ErrorStatus};

// Re-export extractors
pub use extractors::{PathParam, ValidatedJson, ValidatedQuery, validation_message};
