use super::common::{ExternalUrls, Followers, Image};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Publicly visible profile of any user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPublic {
    pub display_name: Option<String>,
    pub external_urls: ExternalUrls,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub id: String,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

/// Profile of the current user. The extra fields depend on granted scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrivate {
    #[serde(flatten)]
    pub base: UserPublic,
    pub birthdate: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub product: Option<String>,
}

impl Deref for UserPrivate {
    type Target = UserPublic;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
