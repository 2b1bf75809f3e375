// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const ATTRIBUTE_NAMES: [&str; 3] = ["name", "artist", "genre"];

/// The closed set of song attributes clients may search or sort by.
///
/// Attribute selection arrives as a free-form query parameter; parsing it
/// into this enum up front means an unknown attribute is rejected at the
/// boundary instead of silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongAttribute {
    Name,
    Artist,
    Genre,
}

impl SongAttribute {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Artist => "artist",
            Self::Genre => "genre",
        }
    }
}

impl Default for SongAttribute {
    fn default() -> Self {
        Self::Name
    }
}

impl Display for SongAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown song attribute {0:?}; expected one of name, artist, genre")]
pub struct UnknownAttributeError(pub String);

impl FromStr for SongAttribute {
    type Err = UnknownAttributeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "name" => Ok(Self::Name),
            "artist" => Ok(Self::Artist),
            "genre" => Ok(Self::Genre),
            other => Err(UnknownAttributeError(other.to_string())),
        }
    }
}
