// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use songbook_model::{Playlist, PlaylistId, Song, SongId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SongResponse {
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl From<&Song> for SongResponse {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            name: song.name.clone(),
            artist: song.artist.clone(),
            genre: song.genre.clone(),
        }
    }
}

/// Playlist body: membership is the ordered id sequence, not song objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistResponse {
    pub id: PlaylistId,
    pub name: String,
    pub songs: Vec<SongId>,
}

impl From<&Playlist> for PlaylistResponse {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name.clone(),
            songs: playlist.song_ids(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortResponse {
    pub message: String,
    pub sorted_playlist: Vec<SongResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_response_carries_membership_order() {
        let mut playlist = Playlist::new(PlaylistId::new(10), "mix");
        playlist.add_song(SongId::new(3));
        playlist.add_song(SongId::new(1));
        playlist.add_song(SongId::new(3));
        let dto = PlaylistResponse::from(&playlist);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["songs"], serde_json::json!([3, 1, 3]));
    }
}
