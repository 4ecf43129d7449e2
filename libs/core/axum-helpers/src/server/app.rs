use super::shutdown::ShutdownCoordinator;
use crate::auth::{ApiKeyConfig, api_key_auth};
use crate::errors::handlers::{not_found, panic_response};
use crate::http::{create_cors_layer, request_logger, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Prefix under which API routes are nested and authenticated.
pub const API_PREFIX: &str = "/api";

/// Path serving the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the application router and its request pipeline.
///
/// Routing:
/// - `apis` nested under [`API_PREFIX`]
/// - `public` merged at the root (no authentication)
/// - OpenAPI document at [`OPENAPI_JSON_PATH`], ReDoc at `/redoc`,
///   RapiDoc at `/rapidoc`, Scalar at `/scalar`
/// - every unmatched request, including a known path with an unsupported
///   method, answered by the `not_found` fallback
///
/// A single trailing slash is trimmed before routing, so `/api/products/`
/// reaches the same handler as `/api/products`.
///
/// Pipeline, outermost first:
/// 1. compression, CORS, security headers, trace spans
/// 2. `request_logger` (timestamp, method, path)
/// 3. `api_key_auth` for paths under the API prefix (fallback included)
/// 4. panic catcher, turning handler panics into a generic 500
/// 5. extractors (validation) and the handler; errors are translated by
///    `AppError`'s `IntoResponse`
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is invalid.
///
/// # Example
/// ```ignore
/// let router = create_router::<ApiDoc>(
///     Router::new().nest("/products", products_router),
///     Router::new().route("/", get(root)),
///     ApiKeyConfig::default(),
///     &ServerConfig::default(),
/// )?;
/// ```
pub fn create_router<T>(
    apis: Router,
    public: Router,
    api_key: ApiKeyConfig,
    server_config: &ServerConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let cors_layer = create_cors_layer(&server_config.cors_allowed_origins)?;

    let openapi = T::openapi();
    let docs = Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()));

    let router = Router::new()
        .merge(docs)
        .merge(public)
        .nest(API_PREFIX, apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(api_key, api_key_auth))
        .layer(middleware::from_fn(request_logger))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    // Route layers run after matching, so the path is normalized by an
    // outer router that hands every request to the real one.
    Ok(Router::new().fallback_service(NormalizePath::trim_trailing_slash(router)))
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained by axum's graceful shutdown; `cleanup` is
/// bounded by `shutdown_timeout`. Cleanup also runs if the server stops on
/// its own because of an error.
///
/// # Example
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     info!("flushing state");
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
