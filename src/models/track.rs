use super::album::AlbumSimplified;
use super::artist::ArtistSimplified;
use super::common::{Context, ExternalIds, ExternalUrls};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Points at the original track when the API relinked the requested one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLink {
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSimplified {
    pub artists: Vec<ArtistSimplified>,
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    pub duration_ms: u32,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    /// Only present when a market was given.
    pub is_playable: Option<bool>,
    pub linked_from: Option<TrackLink>,
    pub name: String,
    pub preview_url: Option<String>,
    pub track_number: u32,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    #[serde(flatten)]
    pub base: TrackSimplified,
    pub album: Option<AlbumSimplified>,
    pub external_ids: ExternalIds,
    pub popularity: Option<u32>,
}

impl Deref for Track {
    type Target = TrackSimplified;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

/// Wrapper returned by multi-track lookups and artist top tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracks {
    pub tracks: Vec<Option<Track>>,
}

/// A track in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedTrack {
    pub added_at: Option<DateTime<Utc>>,
    pub track: Track,
}

/// One entry of the user's listening history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayHistory {
    pub track: TrackSimplified,
    pub played_at: Option<DateTime<Utc>>,
    pub context: Option<Context>,
}
