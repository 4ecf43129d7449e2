use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// First stage of the request pipeline: log every request.
///
/// Records the arrival timestamp (RFC 3339, millisecond precision), the
/// method and the path with its query string. Never short-circuits.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    tracing::info!(
        %timestamp,
        method = %request.method(),
        path = %request.uri(),
        "Incoming request"
    );

    next.run(request).await
}
