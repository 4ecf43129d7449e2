use super::config::{API_KEY_HEADER, ApiKeyConfig};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// API key authentication middleware.
///
/// Only paths under [`ApiKeyConfig::protected_prefix`] are checked. A missing
/// or mismatching `x-api-key` header short-circuits the request with
/// [`AppError::Authentication`]; nothing behind this layer runs.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::auth::{ApiKeyConfig, api_key_auth};
///
/// let app = Router::new()
///     .nest("/api", api_routes)
///     .layer(axum::middleware::from_fn_with_state(
///         ApiKeyConfig::default(),
///         api_key_auth,
///     ));
/// ```
pub async fn api_key_auth(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !config.protects(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !config.accepts(presented) {
        tracing::debug!(
            path = %request.uri().path(),
            header_present = presented.is_some(),
            "Rejected request with invalid API key"
        );
        return Err(AppError::Authentication("Invalid API key".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/things", get(|| async { "things" }))
            .route("/open", get(|| async { "open" }))
            .layer(axum::middleware::from_fn_with_state(
                ApiKeyConfig::new("k").unwrap(),
                api_key_auth,
            ))
    }

    async fn status(uri: &str, key: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_protected_path_requires_key() {
        assert_eq!(status("/api/things", None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status("/api/things", Some("wrong")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status("/api/things", Some("k")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unprotected_path_passes_through() {
        assert_eq!(status("/open", None).await, StatusCode::OK);
    }
}
