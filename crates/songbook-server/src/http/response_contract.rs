// SPDX-License-Identifier: Apache-2.0

use crate::store::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use songbook_api::{ApiError, ApiErrorCode, MessageResponse};

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::InvalidIdentifier
        | ApiErrorCode::MissingField
        | ApiErrorCode::InvalidAttribute
        | ApiErrorCode::AlreadyExists => StatusCode::BAD_REQUEST,
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::MissingSongReference => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(err.code);
    (status, Json(json!({"error": err}))).into_response()
}

#[must_use]
pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(MessageResponse::new(message))).into_response()
}

/// One place where store failures pick up their wire code and the
/// client-facing message text.
#[must_use]
pub(crate) fn catalog_error_response(err: &CatalogError) -> Response {
    let api_err = match err {
        CatalogError::SongNotFound(id) => ApiError::new(
            ApiErrorCode::NotFound,
            "Song not found.",
            json!({"song_id": id}),
        ),
        CatalogError::PlaylistNotFound(id) => ApiError::new(
            ApiErrorCode::NotFound,
            "Playlist not found.",
            json!({"playlist_id": id}),
        ),
        CatalogError::SongExists(id) => ApiError::new(
            ApiErrorCode::AlreadyExists,
            "Song already exists.",
            json!({"song_id": id}),
        ),
        CatalogError::PlaylistExists(id) => ApiError::new(
            ApiErrorCode::AlreadyExists,
            "Playlist already exists.",
            json!({"playlist_id": id}),
        ),
        CatalogError::MissingSong(id) => ApiError::new(
            ApiErrorCode::MissingSongReference,
            format!("Playlist references song {id}, which no longer exists."),
            json!({"song_id": id}),
        ),
    };
    api_error_response(api_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use songbook_model::SongId;

    #[test]
    fn status_mapping_covers_the_taxonomy() {
        assert_eq!(
            api_error_status(ApiErrorCode::InvalidIdentifier),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api_error_status(ApiErrorCode::AlreadyExists),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(api_error_status(ApiErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            api_error_status(ApiErrorCode::MissingSongReference),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_song_names_the_id() {
        let resp = catalog_error_response(&CatalogError::MissingSong(SongId::new(8)));
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
