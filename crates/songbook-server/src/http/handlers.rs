// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{
    api_error_response, catalog_error_response, message_response,
};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use songbook_api::params::{
    attribute_param, optional_str, require_playlist_id, require_song_id, require_str,
};
use songbook_api::{ApiError, PlaylistResponse, SongResponse, SortResponse};
use songbook_model::{Playlist, PlaylistId, Song, SongId, SongUpdate};
use std::collections::HashMap;
use tracing::info;

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// Path segments arrive as strings; parsing them here keeps a non-integer
// id on the service's own 400 envelope instead of a framework rejection.
fn song_id_from_path(raw: &str) -> Result<SongId, Response> {
    SongId::parse(raw)
        .map_err(|err| api_error_response(ApiError::invalid_identifier("song_id", err.input())))
}

fn playlist_id_from_path(raw: &str) -> Result<PlaylistId, Response> {
    PlaylistId::parse(raw)
        .map_err(|err| api_error_response(ApiError::invalid_identifier("playlist_id", err.input())))
}

pub(crate) async fn create_song_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let song = match parse_song_body(&body) {
        Ok(song) => song,
        Err(err) => return api_error_response(err),
    };
    let id = song.id;
    let mut catalog = state.catalog.write().await;
    match catalog.create_song(song) {
        Ok(()) => {
            info!(song_id = %id, "song created");
            message_response(StatusCode::CREATED, "Song created.")
        }
        Err(err) => catalog_error_response(&err),
    }
}

fn parse_song_body(body: &Value) -> Result<Song, ApiError> {
    let id = require_song_id(body, "id")?;
    let name = require_str(body, "name")?;
    let artist = require_str(body, "artist")?;
    let genre = require_str(body, "genre")?;
    Ok(Song::new(id, name, artist, genre))
}

pub(crate) async fn get_song_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match song_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let catalog = state.catalog.read().await;
    match catalog.song(id) {
        Ok(song) => (StatusCode::OK, Json(SongResponse::from(song))).into_response(),
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn update_song_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let id = match song_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let update = SongUpdate {
        name: optional_str(&body, "name"),
        artist: optional_str(&body, "artist"),
        genre: optional_str(&body, "genre"),
    };
    let mut catalog = state.catalog.write().await;
    match catalog.update_song(id, update) {
        Ok(()) => message_response(StatusCode::OK, "Song updated."),
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn delete_song_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match song_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut catalog = state.catalog.write().await;
    match catalog.delete_song(id) {
        Ok(()) => {
            info!(song_id = %id, "song deleted");
            message_response(StatusCode::OK, "Song deleted.")
        }
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn search_songs_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(query) = params.get("query") else {
        return api_error_response(ApiError::missing_field("query"));
    };
    let attribute = match attribute_param(&params, "attribute") {
        Ok(attribute) => attribute,
        Err(err) => return api_error_response(err),
    };
    let catalog = state.catalog.read().await;
    let results: Vec<SongResponse> = catalog
        .search_songs(query, attribute)
        .into_iter()
        .map(SongResponse::from)
        .collect();
    (StatusCode::OK, Json(results)).into_response()
}

pub(crate) async fn create_playlist_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let id = match require_playlist_id(&body, "id") {
        Ok(id) => id,
        Err(err) => return api_error_response(err),
    };
    let name = match require_str(&body, "name") {
        Ok(name) => name,
        Err(err) => return api_error_response(err),
    };
    let mut catalog = state.catalog.write().await;
    match catalog.create_playlist(Playlist::new(id, name)) {
        Ok(()) => {
            info!(playlist_id = %id, "playlist created");
            message_response(StatusCode::CREATED, "Playlist created.")
        }
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn get_playlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match playlist_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let catalog = state.catalog.read().await;
    match catalog.playlist(id) {
        Ok(playlist) => (StatusCode::OK, Json(PlaylistResponse::from(playlist))).into_response(),
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn update_playlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let id = match playlist_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut catalog = state.catalog.write().await;
    match catalog.rename_playlist(id, optional_str(&body, "name")) {
        Ok(()) => message_response(StatusCode::OK, "Playlist updated."),
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn delete_playlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match playlist_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut catalog = state.catalog.write().await;
    match catalog.delete_playlist(id) {
        Ok(()) => {
            info!(playlist_id = %id, "playlist deleted");
            message_response(StatusCode::OK, "Playlist deleted.")
        }
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn add_playlist_song_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let playlist_id = match playlist_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let song_id = match require_song_id(&body, "song_id") {
        Ok(id) => id,
        Err(err) => return api_error_response(err),
    };
    let mut catalog = state.catalog.write().await;
    match catalog.add_song_to_playlist(playlist_id, song_id) {
        Ok(()) => {
            info!(playlist_id = %playlist_id, song_id = %song_id, "song added to playlist");
            message_response(StatusCode::OK, "Song added to playlist.")
        }
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn remove_playlist_song_handler(
    State(state): State<AppState>,
    Path((raw_playlist_id, raw_song_id)): Path<(String, String)>,
) -> Response {
    let playlist_id = match playlist_id_from_path(&raw_playlist_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let song_id = match song_id_from_path(&raw_song_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut catalog = state.catalog.write().await;
    // A song that was never in the playlist is still a 200: the removal
    // is a silent no-op by contract.
    match catalog.remove_song_from_playlist(playlist_id, song_id) {
        Ok(_removed) => message_response(StatusCode::OK, "Song removed from playlist."),
        Err(err) => catalog_error_response(&err),
    }
}

pub(crate) async fn sort_playlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let playlist_id = match playlist_id_from_path(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let attribute = match attribute_param(&params, "sort_by") {
        Ok(attribute) => attribute,
        Err(err) => return api_error_response(err),
    };
    let mut catalog = state.catalog.write().await;
    let sorted = match catalog.sort_playlist(playlist_id, attribute) {
        Ok(sorted) => sorted,
        Err(err) => return catalog_error_response(&err),
    };
    // Every id was just resolved under the same write lock, so the
    // lookups here cannot miss.
    let sorted_playlist: Vec<SongResponse> = sorted
        .iter()
        .filter_map(|id| catalog.song(*id).ok())
        .map(SongResponse::from)
        .collect();
    info!(playlist_id = %playlist_id, sort_by = %attribute, "playlist sorted");
    let body = SortResponse {
        message: format!("Playlist sorted by {attribute}."),
        sorted_playlist,
    };
    (StatusCode::OK, Json(body)).into_response()
}
