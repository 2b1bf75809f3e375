// SPDX-License-Identifier: Apache-2.0

use crate::{PlaylistId, SongId, SongList, SongListIter};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of song ids.
///
/// The playlist owns its [`SongList`] exclusively; membership stores ids
/// only, so a listed song may no longer exist in the catalog (deleting a
/// song does not cascade into playlists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub songs: SongList,
}

impl Playlist {
    #[must_use]
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            songs: SongList::new(),
        }
    }

    /// Appends the id to the membership order. Whether the song exists
    /// in the catalog is the caller's concern.
    pub fn add_song(&mut self, song_id: SongId) {
        self.songs.append(song_id);
    }

    /// Removes the first occurrence of the id; absent ids are a silent
    /// no-op. Returns whether anything was removed.
    pub fn remove_song(&mut self, song_id: SongId) -> bool {
        self.songs.delete_with_value(song_id)
    }

    #[must_use]
    pub fn songs(&self) -> SongListIter<'_> {
        self.songs.iter()
    }

    #[must_use]
    pub fn song_ids(&self) -> Vec<SongId> {
        self.songs.to_vec()
    }

    /// Swaps in a rebuilt membership list, discarding the old chain.
    pub fn replace_songs(&mut self, songs: SongList) {
        self.songs = songs;
    }
}
