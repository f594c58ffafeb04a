use super::common::{ExternalUrls, Image};
use super::paging::Page;
use super::user::UserPublic;
use serde::{Deserialize, Serialize};

/// Link to a playlist's tracks, with their count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksRef {
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistSimplified {
    pub collaborative: bool,
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    pub images: Vec<Image>,
    pub name: String,
    pub owner: Option<UserPublic>,
    pub public: Option<bool>,
    pub snapshot_id: Option<String>,
    pub tracks: TracksRef,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

/// Playlist listing as returned by browse endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlists {
    /// Editorial headline, e.g. `"Monday morning music, coming right up!"`.
    pub message: Option<String>,
    pub playlists: Page<PlaylistSimplified>,
}
