//! Query-string extractor with automatic validation.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::validation_message;

/// Query-string counterpart of [`ValidatedJson`](super::ValidatedJson).
///
/// Unparseable values (e.g. `page=abc` for a numeric field) and rule
/// violations both become [`AppError::Validation`].
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        data.validate()
            .map_err(|errors| AppError::Validation(validation_message(&errors)))?;

        Ok(ValidatedQuery(data))
    }
}
