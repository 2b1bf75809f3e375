#![forbid(unsafe_code)]
//! Songbook model SSOT.
//!
//! Every record the catalog serves is defined here: [`Song`] and
//! [`Playlist`] identities, the closed [`SongAttribute`] enumeration used
//! for search and sort dispatch, and [`SongList`], the ordered
//! duplicate-tolerant chain of song ids that backs playlist membership.
//! This crate is pure data plus invariants; it performs no I/O and knows
//! nothing about HTTP.

mod attribute;
mod ids;
mod playlist;
mod song;
mod song_list;

pub use attribute::{SongAttribute, UnknownAttributeError, ATTRIBUTE_NAMES};
pub use ids::{ParseIdError, PlaylistId, SongId};
pub use playlist::Playlist;
pub use song::{Song, SongUpdate};
pub use song_list::{SongList, SongListIter};

pub const CRATE_NAME: &str = "songbook-model";
