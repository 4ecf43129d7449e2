use std::any::Any;

use axum::{
    extract::OriginalUri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback for requests that match no route.
///
/// Echoes the original path (with query string) in the message. Also used
/// as the method-not-allowed fallback so an unsupported method on a known
/// path is reported the same way.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    AppError::NotFound(format!("Can't find {} on this server!", path))
}

/// Converts a caught handler panic into a non-operational error response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Unexpected(eyre::eyre!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, Uri};

    #[tokio::test]
    async fn test_not_found_echoes_path_and_query() {
        let uri: Uri = "/nowhere?x=1".parse().unwrap();
        let err = not_found(OriginalUri(uri)).await;
        assert_eq!(err.to_string(), "Can't find /nowhere?x=1 on this server!");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
