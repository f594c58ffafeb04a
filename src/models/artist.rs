use super::common::{ExternalUrls, Followers, Image};
use super::paging::CursorPage;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSimplified {
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

/// Full artist object: the simplified fields plus popularity data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    #[serde(flatten)]
    pub base: ArtistSimplified,
    pub followers: Option<Followers>,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub popularity: Option<u32>,
}

impl Deref for Artist {
    type Target = ArtistSimplified;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

/// Wrapper returned by multi-artist lookups and related artists.
///
/// Positions match the requested IDs; unknown IDs come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artists {
    pub artists: Vec<Option<Artist>>,
}

/// Artists the current user follows, paged by cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowedArtists {
    pub artists: CursorPage<Artist>,
}
