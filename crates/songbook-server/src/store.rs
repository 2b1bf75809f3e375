// SPDX-License-Identifier: Apache-2.0
//! The process-wide catalog: two independent id-keyed maps, one for
//! songs and one for playlists. Lives for the process lifetime, persists
//! nothing, and provides no internal locking (the [`crate::AppState`]
//! lock serializes access).

use songbook_model::{
    Playlist, PlaylistId, Song, SongAttribute, SongId, SongList, SongUpdate,
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("song {0} not found")]
    SongNotFound(SongId),
    #[error("playlist {0} not found")]
    PlaylistNotFound(PlaylistId),
    #[error("song {0} already exists")]
    SongExists(SongId),
    #[error("playlist {0} already exists")]
    PlaylistExists(PlaylistId),
    /// A playlist entry points at a song id that is no longer in the
    /// song map, so an attribute lookup on it is impossible.
    #[error("playlist references missing song {0}")]
    MissingSong(SongId),
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    songs: HashMap<SongId, Song>,
    playlists: HashMap<PlaylistId, Playlist>,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_song(&mut self, song: Song) -> Result<(), CatalogError> {
        if self.songs.contains_key(&song.id) {
            return Err(CatalogError::SongExists(song.id));
        }
        self.songs.insert(song.id, song);
        Ok(())
    }

    pub fn song(&self, id: SongId) -> Result<&Song, CatalogError> {
        self.songs.get(&id).ok_or(CatalogError::SongNotFound(id))
    }

    pub fn update_song(&mut self, id: SongId, update: SongUpdate) -> Result<(), CatalogError> {
        let song = self
            .songs
            .get_mut(&id)
            .ok_or(CatalogError::SongNotFound(id))?;
        update.apply(song);
        Ok(())
    }

    /// Deletes the song record only. Playlist entries keep the id; the
    /// catalog never cascades into membership lists.
    pub fn delete_song(&mut self, id: SongId) -> Result<(), CatalogError> {
        self.songs
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::SongNotFound(id))
    }

    /// Case-insensitive substring match of `query` against the chosen
    /// attribute, over every song in the catalog. Results are ordered by
    /// song id so repeated searches are deterministic.
    #[must_use]
    pub fn search_songs(&self, query: &str, attribute: SongAttribute) -> Vec<&Song> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&Song> = self
            .songs
            .values()
            .filter(|song| song.attribute(attribute).to_lowercase().contains(&needle))
            .collect();
        hits.sort_by_key(|song| song.id);
        hits
    }

    pub fn create_playlist(&mut self, playlist: Playlist) -> Result<(), CatalogError> {
        if self.playlists.contains_key(&playlist.id) {
            return Err(CatalogError::PlaylistExists(playlist.id));
        }
        self.playlists.insert(playlist.id, playlist);
        Ok(())
    }

    pub fn playlist(&self, id: PlaylistId) -> Result<&Playlist, CatalogError> {
        self.playlists
            .get(&id)
            .ok_or(CatalogError::PlaylistNotFound(id))
    }

    pub fn rename_playlist(
        &mut self,
        id: PlaylistId,
        name: Option<String>,
    ) -> Result<(), CatalogError> {
        let playlist = self
            .playlists
            .get_mut(&id)
            .ok_or(CatalogError::PlaylistNotFound(id))?;
        if let Some(name) = name {
            playlist.name = name;
        }
        Ok(())
    }

    pub fn delete_playlist(&mut self, id: PlaylistId) -> Result<(), CatalogError> {
        self.playlists
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::PlaylistNotFound(id))
    }

    /// Appends the song to the playlist's membership. The song must exist
    /// at insertion time; duplicates in one playlist are allowed.
    pub fn add_song_to_playlist(
        &mut self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<(), CatalogError> {
        if !self.songs.contains_key(&song_id) {
            return Err(CatalogError::SongNotFound(song_id));
        }
        let playlist = self
            .playlists
            .get_mut(&playlist_id)
            .ok_or(CatalogError::PlaylistNotFound(playlist_id))?;
        playlist.add_song(song_id);
        Ok(())
    }

    /// Removes the first occurrence of the song id from the playlist.
    /// A song id that was never added is a silent no-op (`Ok(false)`);
    /// only a missing playlist is an error.
    pub fn remove_song_from_playlist(
        &mut self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<bool, CatalogError> {
        let playlist = self
            .playlists
            .get_mut(&playlist_id)
            .ok_or(CatalogError::PlaylistNotFound(playlist_id))?;
        Ok(playlist.remove_song(song_id))
    }

    /// Rebuilds the playlist's membership in stable sorted order of the
    /// chosen attribute (case-sensitive lexical compare of the stored
    /// strings). Every id is resolved to its song before anything is
    /// mutated, so a dangling id fails the whole operation and leaves the
    /// playlist untouched.
    pub fn sort_playlist(
        &mut self,
        playlist_id: PlaylistId,
        attribute: SongAttribute,
    ) -> Result<Vec<SongId>, CatalogError> {
        let playlist = self
            .playlists
            .get(&playlist_id)
            .ok_or(CatalogError::PlaylistNotFound(playlist_id))?;

        let mut keyed: Vec<(String, SongId)> = Vec::with_capacity(playlist.songs.len());
        for song_id in playlist.songs() {
            let song = self
                .songs
                .get(&song_id)
                .ok_or(CatalogError::MissingSong(song_id))?;
            keyed.push((song.attribute(attribute).to_string(), song_id));
        }
        // Compare keys only; Vec::sort_by is stable, so equal keys keep
        // their original relative order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let sorted: Vec<SongId> = keyed.into_iter().map(|(_, id)| id).collect();

        let mut rebuilt = SongList::new();
        for song_id in &sorted {
            rebuilt.append(*song_id);
        }
        if let Some(playlist) = self.playlists.get_mut(&playlist_id) {
            playlist.replace_songs(rebuilt);
        }
        Ok(sorted)
    }
}
