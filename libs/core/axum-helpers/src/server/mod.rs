//! Server infrastructure module.
//!
//! - router assembly with the request pipeline and OpenAPI documentation
//! - liveness endpoint
//! - graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let public = Router::new().merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(api_routes, public, api_key, &server_config)?;
//! create_production_app(router, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{API_PREFIX, OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
