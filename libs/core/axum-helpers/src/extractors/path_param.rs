//! Path extractor whose rejections go through [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::extract::Path`].
///
/// A segment that cannot be decoded or deserialized (e.g. a percent-encoded
/// byte sequence that is not UTF-8) becomes [`AppError::Validation`], so the
/// client receives the usual JSON error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::PathParam;
///
/// async fn show(PathParam(id): PathParam<String>) -> String {
///     id
/// }
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(PathParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Router, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/{id}", get(|PathParam(id): PathParam<String>| async move { id }))
    }

    #[tokio::test]
    async fn test_extracts_segment() {
        let response = app()
            .oneshot(Request::builder().uri("/abc-123").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"abc-123");
    }

    #[tokio::test]
    async fn test_invalid_utf8_segment_is_json_validation_error() {
        let response = app()
            .oneshot(Request::builder().uri("/%FF").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "fail");
        assert!(body["message"].as_str().unwrap().contains("UTF-8"));
    }
}
