// SPDX-License-Identifier: Apache-2.0
//! Boundary parsing for loosely-shaped request JSON and query strings.
//!
//! Create-style bodies are inspected field by field instead of through a
//! derive, so a non-integer id or an absent field maps to the service's
//! own 400 envelope rather than a framework rejection.

use crate::ApiError;
use serde_json::Value;
use songbook_model::{PlaylistId, SongAttribute, SongId};
use std::collections::HashMap;

/// Pulls a required integer field out of a JSON body.
pub fn require_i64(body: &Value, field: &str) -> Result<i64, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ApiError::missing_field(field)),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| ApiError::invalid_identifier(field, &value.to_string())),
    }
}

pub fn require_song_id(body: &Value, field: &str) -> Result<SongId, ApiError> {
    require_i64(body, field).map(SongId::new)
}

pub fn require_playlist_id(body: &Value, field: &str) -> Result<PlaylistId, ApiError> {
    require_i64(body, field).map(PlaylistId::new)
}

/// Pulls a required string field out of a JSON body.
pub fn require_str(body: &Value, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ApiError::missing_field(field)),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::missing_field(field)),
    }
}

/// Optional string field; absent and `null` both mean "keep current".
pub fn optional_str(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Attribute selector from a query string, defaulting to `name`.
pub fn attribute_param(
    query: &HashMap<String, String>,
    key: &str,
) -> Result<SongAttribute, ApiError> {
    match query.get(key) {
        None => Ok(SongAttribute::default()),
        Some(raw) => raw
            .parse::<SongAttribute>()
            .map_err(|_| ApiError::invalid_attribute(raw)),
    }
}
