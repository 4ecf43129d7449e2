//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::validation_message;

/// Message for a JSON body that is missing a field or has one of the wrong type.
pub const INVALID_FIELDS_MESSAGE: &str = "All fields are required and must be of correct type";

/// Message for a body that is not syntactically valid JSON.
pub const MALFORMED_JSON_MESSAGE: &str = "Request body is not valid JSON";

/// JSON extractor with automatic validation.
///
/// Rejections are reported as [`AppError::Validation`]:
/// - a missing field or a field of the wrong type yields
///   [`INVALID_FIELDS_MESSAGE`];
/// - a body that is not JSON yields [`MALFORMED_JSON_MESSAGE`];
/// - a missing `Content-Type: application/json` header yields axum's
///   description of the problem;
/// - a body that parses but breaks a `#[validate]` rule yields the rule
///   messages.
///
/// The deserializer's own text (with parser positions) is only logged.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Rename {
///     #[validate(length(min = 1, message = "name is required"))]
///     name: String,
/// }
///
/// async fn rename(ValidatedJson(body): ValidatedJson<Rename>) -> String {
///     body.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        data.validate()
            .map_err(|errors| AppError::Validation(validation_message(&errors)))?;

        Ok(ValidatedJson(data))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(rejection = %rejection.body_text(), "Rejected JSON body");

    let message = match rejection {
        JsonRejection::JsonDataError(_) => INVALID_FIELDS_MESSAGE.to_string(),
        JsonRejection::JsonSyntaxError(_) => MALFORMED_JSON_MESSAGE.to_string(),
        other => other.body_text(),
    };

    AppError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
        price: f64,
    }

    fn request(body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn extract(body: &str) -> Result<Payload, AppError> {
        ValidatedJson::<Payload>::from_request(request(body), &())
            .await
            .map(|ValidatedJson(p)| p)
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let payload = extract(r#"{"name":"Widget","price":9.99}"#).await.unwrap();
        assert_eq!(payload.name, "Widget");
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_error() {
        let err = extract(r#"{"name":"","price":-5}"#).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name is required; price must be positive");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let err = extract(r#"{"price":1}"#).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == INVALID_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_wrong_type_is_validation_error() {
        let err = extract(r#"{"name":"Widget","price":"cheap"}"#).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == INVALID_FIELDS_MESSAGE));
        assert!(!err.to_string().contains("line"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let err = extract("{not json").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MALFORMED_JSON_MESSAGE));
    }
}
