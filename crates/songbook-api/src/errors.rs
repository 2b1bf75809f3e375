// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidIdentifier,
    MissingField,
    InvalidAttribute,
    AlreadyExists,
    NotFound,
    MissingSongReference,
    Internal,
}

/// The one error shape every failure response carries, inside an
/// `{"error": {...}}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_identifier(field: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidIdentifier,
            format!("{field} must be an integer"),
            json!({"field": field, "value": value}),
        )
    }

    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ApiErrorCode::MissingField,
            format!("missing required field: {field}"),
            json!({"field": field}),
        )
    }

    #[must_use]
    pub fn invalid_attribute(value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidAttribute,
            format!("unknown song attribute: {value}"),
            json!({"value": value, "expected": ["name", "artist", "genre"]}),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_as_pascal_case_strings() {
        let json = serde_json::to_string(&ApiErrorCode::MissingSongReference).unwrap();
        assert_eq!(json, "\"MissingSongReference\"");
    }

    #[test]
    fn helper_constructors_fill_details() {
        let err = ApiError::invalid_identifier("id", "abc");
        assert_eq!(err.code, ApiErrorCode::InvalidIdentifier);
        assert_eq!(err.details["value"], "abc");
    }
}
