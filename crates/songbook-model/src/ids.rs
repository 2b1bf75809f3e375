// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} id must be an integer, got {input:?}")]
pub struct ParseIdError {
    kind: &'static str,
    input: String,
}

impl ParseIdError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

macro_rules! id_newtype {
    ($name:ident, $kind:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Parses a decimal integer id from its path-segment form.
            pub fn parse(input: &str) -> Result<Self, ParseIdError> {
                input.parse::<i64>().map(Self).map_err(|_| ParseIdError {
                    kind: $kind,
                    input: input.to_string(),
                })
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

id_newtype!(SongId, "song");
id_newtype!(PlaylistId, "playlist");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(SongId::parse("42"), Ok(SongId::new(42)));
        assert_eq!(PlaylistId::parse("-7"), Ok(PlaylistId::new(-7)));
    }

    #[test]
    fn rejects_non_integer_ids() {
        for bad in ["", "abc", "1.5", "1e3", " 2"] {
            assert!(SongId::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&SongId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
