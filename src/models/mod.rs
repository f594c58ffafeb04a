//! Response models and the enumerated request parameters.
//!
//! Every struct uses `#[serde(default)]`, so a field missing from a response
//! decodes to its default rather than failing, and unknown fields are
//! skipped. Full objects embed their simplified form via `#[serde(flatten)]`
//! and deref to it.

mod album;
mod artist;
mod browse;
mod common;
mod paging;
mod playlist;
mod track;
mod user;

pub use album::{Album, AlbumSimplified, Albums, SavedAlbum};
pub use artist::{Artist, ArtistSimplified, Artists, FollowedArtists};
pub use browse::{Categories, Category, NewReleases};
pub use common::{Context, Copyright, ExternalIds, ExternalUrls, Followers, Image};
pub use paging::{Cursor, CursorPage, Page};
pub use playlist::{PlaylistSimplified, Playlists, TracksRef};
pub use track::{PlayHistory, SavedTrack, Track, TrackLink, TrackSimplified, Tracks};
pub use user::{UserPrivate, UserPublic};

use crate::binding::{ParamValue, Scalar};
use std::fmt;

/// Period over which top artists and tracks are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Roughly the last four weeks.
    ShortTerm,
    /// Roughly the last six months.
    #[default]
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

impl TimeRange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }
}

/// Album kind used to filter an artist's albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumType {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl AlbumType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Single => "single",
            Self::AppearsOn => "appears_on",
            Self::Compilation => "compilation",
        }
    }
}

/// Kind of entity a follow operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowType {
    Artist,
    User,
}

impl FollowType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::User => "user",
        }
    }
}

macro_rules! wire_enum {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Str(value.as_str().to_string())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.into())
                }
            }
        )*
    };
}

wire_enum!(TimeRange, AlbumType, FollowType);
