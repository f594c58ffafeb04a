use super::artist::ArtistSimplified;
use super::common::{Copyright, ExternalIds, ExternalUrls, Image};
use super::paging::Page;
use super::track::TrackSimplified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumSimplified {
    /// Present on an artist's albums: how the artist relates to the album.
    pub album_group: Option<String>,
    pub album_type: Option<String>,
    pub artists: Vec<ArtistSimplified>,
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    pub images: Vec<Image>,
    pub name: String,
    /// `"1981"`, `"1981-12"` or `"1981-12-15"` depending on precision.
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub total_tracks: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    #[serde(flatten)]
    pub base: AlbumSimplified,
    pub copyrights: Vec<Copyright>,
    pub external_ids: ExternalIds,
    pub genres: Vec<String>,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    pub tracks: Page<TrackSimplified>,
}

impl Deref for Album {
    type Target = AlbumSimplified;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

/// Wrapper returned by multi-album lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Albums {
    pub albums: Vec<Option<Album>>,
}

/// An album in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedAlbum {
    pub added_at: Option<DateTime<Utc>>,
    pub album: Album,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_with_track_page() {
        let album: Album = serde_json::from_str(
            r#"{
                "album_type": "album",
                "artists": [{"id": "2BTZIqw0ntH9MvilQ3ewNY", "name": "Cyndi Lauper", "type": "artist"}],
                "copyrights": [{"text": "(P) 2000 Sony Music Entertainment Inc.", "type": "P"}],
                "external_ids": {"upc": "5099749994324"},
                "genres": [],
                "id": "0sNOF9WDwhWunNAHPD3Baj",
                "label": "Epic",
                "name": "She's So Unusual",
                "popularity": 39,
                "release_date": "1983",
                "release_date_precision": "year",
                "total_tracks": 13,
                "tracks": {
                    "items": [{"name": "Money Changes Everything", "track_number": 1}],
                    "limit": 50,
                    "offset": 0,
                    "total": 13
                },
                "type": "album"
            }"#,
        )
        .unwrap();
        assert_eq!(album.name, "She's So Unusual");
        assert_eq!(album.release_date_precision.as_deref(), Some("year"));
        assert_eq!(album.artists[0].name, "Cyndi Lauper");
        assert_eq!(album.copyrights[0].kind, "P");
        assert_eq!(album.tracks.total, 13);
        assert_eq!(album.tracks.items[0].name, "Money Changes Everything");
        assert_eq!(album.label.as_deref(), Some("Epic"));
    }

    #[test]
    fn test_saved_album_added_at() {
        let saved: SavedAlbum = serde_json::from_str(
            r#"{"added_at": "2015-11-26T19:13:31Z", "album": {"name": "Love Is Dead"}}"#,
        )
        .unwrap();
        assert_eq!(saved.album.name, "Love Is Dead");
        assert!(saved.added_at.is_some());
    }
}
