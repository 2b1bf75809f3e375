// SPDX-License-Identifier: Apache-2.0

use crate::{SongAttribute, SongId};
use serde::{Deserialize, Serialize};

/// One catalog entry. Identity is the id; the three string attributes are
/// independently mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl Song {
    #[must_use]
    pub fn new(
        id: SongId,
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Reads the requested attribute; the closed enum keeps this a total
    /// match rather than reflective field access.
    #[must_use]
    pub fn attribute(&self, attribute: SongAttribute) -> &str {
        match attribute {
            SongAttribute::Name => &self.name,
            SongAttribute::Artist => &self.artist,
            SongAttribute::Genre => &self.genre,
        }
    }
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongUpdate {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
}

impl SongUpdate {
    pub fn apply(self, song: &mut Song) {
        if let Some(name) = self.name {
            song.name = name;
        }
        if let Some(artist) = self.artist {
            song.artist = artist;
        }
        if let Some(genre) = self.genre {
            song.genre = genre;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_dispatch_reads_each_field() {
        let song = Song::new(SongId::new(1), "Alpha", "Ada", "ambient");
        assert_eq!(song.attribute(SongAttribute::Name), "Alpha");
        assert_eq!(song.attribute(SongAttribute::Artist), "Ada");
        assert_eq!(song.attribute(SongAttribute::Genre), "ambient");
    }

    #[test]
    fn partial_update_keeps_absent_fields() {
        let mut song = Song::new(SongId::new(1), "Alpha", "Ada", "ambient");
        SongUpdate {
            artist: Some("Grace".to_string()),
            ..SongUpdate::default()
        }
        .apply(&mut song);
        assert_eq!(song.name, "Alpha");
        assert_eq!(song.artist, "Grace");
        assert_eq!(song.genre, "ambient");
    }
}
