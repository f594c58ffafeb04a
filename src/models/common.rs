use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Known external URLs for an object, keyed by type (`"spotify"`).
pub type ExternalUrls = BTreeMap<String, String>;

/// Known external IDs, keyed by type (`"isrc"`, `"ean"`, `"upc"`).
pub type ExternalIds = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub height: Option<u32>,
    pub url: String,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
    /// Always `null` in current API responses.
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Copyright {
    pub text: String,
    /// `"C"` for copyright, `"P"` for performance copyright.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Where a track was played from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub href: Option<String>,
    pub external_urls: ExternalUrls,
    pub uri: Option<String>,
}
