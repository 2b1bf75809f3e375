#![forbid(unsafe_code)]
//! HTTP service for the in-memory song and playlist catalog.
//!
//! State is one [`CatalogStore`] behind a single `RwLock`: handlers take
//! the read lock for lookups and the write lock for every mutation,
//! including the sort protocol's list rebuild. The linked-list operations
//! are not safe under concurrent mutation, so this coarse guard is the
//! whole concurrency story.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;

mod config;
mod http;
mod store;

pub use config::ApiConfig;
pub use store::{CatalogError, CatalogStore};

pub const CRATE_NAME: &str = "songbook-server";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<CatalogStore>>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(CatalogStore::new())),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/songs", post(http::handlers::create_song_handler))
        .route("/songs/search", get(http::handlers::search_songs_handler))
        .route(
            "/songs/:song_id",
            get(http::handlers::get_song_handler)
                .put(http::handlers::update_song_handler)
                .delete(http::handlers::delete_song_handler),
        )
        .route("/playlists", post(http::handlers::create_playlist_handler))
        .route(
            "/playlists/:playlist_id",
            get(http::handlers::get_playlist_handler)
                .put(http::handlers::update_playlist_handler)
                .delete(http::handlers::delete_playlist_handler),
        )
        .route(
            "/playlists/:playlist_id/songs",
            post(http::handlers::add_playlist_song_handler),
        )
        .route(
            "/playlists/:playlist_id/songs/:song_id",
            delete(http::handlers::remove_playlist_song_handler),
        )
        .route(
            "/playlists/:playlist_id/sort",
            get(http::handlers::sort_playlist_handler),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
