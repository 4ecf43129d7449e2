//! Custom extractors for Axum handlers.
//!
//! These form the validation stage of the request pipeline: bodies and
//! query strings are deserialized and checked with the `validator` crate
//! before a handler runs, path segments are decoded, and every failure
//! becomes [`AppError::Validation`](crate::errors::AppError::Validation).

pub mod path_param;
pub mod validated_json;
pub mod validated_query;

pub use path_param::PathParam;
pub use validated_json::{INVALID_FIELDS_MESSAGE, ValidatedJson};
pub use validated_query::ValidatedQuery;

use validator::ValidationErrors;

/// Flatten validator errors into one client-facing message.
///
/// Uses each rule's custom message when present, otherwise names the field
/// and the failed rule. Messages are sorted and de-duplicated so the output
/// is stable.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid ({})", field, err.code),
            })
        })
        .collect();

    messages.sort();
    messages.dedup();
    messages.join("; ")
}
