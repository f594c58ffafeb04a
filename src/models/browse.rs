use super::album::AlbumSimplified;
use super::common::Image;
use super::paging::Page;
use serde::{Deserialize, Serialize};

/// A browse category, e.g. "Party" or "Mood".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub href: Option<String>,
    pub icons: Vec<Image>,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Categories {
    pub categories: Page<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewReleases {
    pub message: Option<String>,
    pub albums: Page<AlbumSimplified>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_page() {
        let categories: Categories = serde_json::from_str(
            r#"{"categories": {"items": [{"id": "toplists", "name": "Top Lists", "icons": [{"url": "https://t.scdn.co/media/derived/toplists.jpg", "height": 275, "width": 275}]}], "limit": 1, "offset": 0, "total": 31}}"#,
        )
        .unwrap();
        let first = &categories.categories.items[0];
        assert_eq!(first.id, "toplists");
        assert_eq!(first.icons[0].height, Some(275));
        assert_eq!(categories.categories.total, 31);
    }
}
