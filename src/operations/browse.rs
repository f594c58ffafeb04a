use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Categories, Category, NewReleases, Playlists};

pub(super) const FEATURED_PLAYLISTS: OperationDescriptor = OperationDescriptor::new(
    "featured_playlists",
    Method::Get,
    "/v1/browse/featured-playlists",
    &[
        ParamSlot::query("locale"),
        ParamSlot::query("country"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

pub(super) const NEW_RELEASES: OperationDescriptor = OperationDescriptor::new(
    "new_releases",
    Method::Get,
    "/v1/browse/new-releases",
    &[
        ParamSlot::query("country"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

pub(super) const CATEGORIES: OperationDescriptor = OperationDescriptor::new(
    "categories",
    Method::Get,
    "/v1/browse/categories",
    &[
        ParamSlot::query("locale"),
        ParamSlot::query("country"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

pub(super) const CATEGORY: OperationDescriptor = OperationDescriptor::new(
    "category",
    Method::Get,
    "/v1/browse/categories/{category_id}",
    &[
        ParamSlot::path("category_id"),
        ParamSlot::query("locale"),
        ParamSlot::query("country"),
    ],
);

pub(super) const CATEGORY_PLAYLISTS: OperationDescriptor = OperationDescriptor::new(
    "category_playlists",
    Method::Get,
    "/v1/browse/categories/{category_id}/playlists",
    &[
        ParamSlot::path("category_id"),
        ParamSlot::query("country"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

/// Locale, country and paging filters shared by the browse listings.
///
/// `locale` is an ISO 639-1 language code joined to an ISO 3166-1 country
/// code with an underscore, e.g. `"pt_BR"`. Fields an endpoint doesn't take
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseQuery<'q> {
    pub locale: Option<&'q str>,
    pub country: Option<&'q str>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Editorial browse endpoints.
#[derive(Debug, Clone, Copy)]
pub struct BrowseApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> BrowseApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn featured_playlists(
        &self,
        query: &BrowseQuery<'_>,
    ) -> Result<Playlists, SpotifyError> {
        let args = Args::new()
            .with_opt("locale", query.locale)
            .with_opt("country", query.country)
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset);
        self.client.execute(&FEATURED_PLAYLISTS, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn new_releases(&self, query: &BrowseQuery<'_>) -> Result<NewReleases, SpotifyError> {
        let args = Args::new()
            .with_opt("country", query.country)
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset);
        self.client.execute(&NEW_RELEASES, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn categories(&self, query: &BrowseQuery<'_>) -> Result<Categories, SpotifyError> {
        let args = Args::new()
            .with_opt("locale", query.locale)
            .with_opt("country", query.country)
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset);
        self.client.execute(&CATEGORIES, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn category(
        &self,
        category_id: &str,
        locale: Option<&str>,
        country: Option<&str>,
    ) -> Result<Category, SpotifyError> {
        let args = Args::new()
            .with("category_id", category_id)
            .with_opt("locale", locale)
            .with_opt("country", country);
        self.client.execute(&CATEGORY, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn category_playlists(
        &self,
        category_id: &str,
        query: &BrowseQuery<'_>,
    ) -> Result<Playlists, SpotifyError> {
        let args = Args::new()
            .with("category_id", category_id)
            .with_opt("country", query.country)
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset);
        self.client.execute(&CATEGORY_PLAYLISTS, args).await
    }
}
