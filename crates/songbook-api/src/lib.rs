#![forbid(unsafe_code)]
//! Wire contract for the songbook service.
//!
//! Everything a client sees on the wire is defined here: response DTOs,
//! the `{"error": {...}}` envelope with its closed [`ApiErrorCode`] set,
//! and the body-field helpers handlers use to pull typed values out of
//! loosely-shaped request JSON.

mod dto;
mod errors;
pub mod params;

pub use dto::{MessageResponse, PlaylistResponse, SongResponse, SortResponse};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "songbook-api";
