use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{AlbumSimplified, AlbumType, Artist, Artists, Page, Tracks};

pub(super) const GET_ARTIST: OperationDescriptor = OperationDescriptor::new(
    "get_artist",
    Method::Get,
    "/v1/artists/{id}",
    &[ParamSlot::path("id")],
);

pub(super) const GET_SEVERAL_ARTISTS: OperationDescriptor = OperationDescriptor::new(
    "get_several_artists",
    Method::Get,
    "/v1/artists/",
    &[ParamSlot::query_list("ids")],
);

pub(super) const GET_ARTIST_ALBUMS: OperationDescriptor = OperationDescriptor::new(
    "get_artist_albums",
    Method::Get,
    "/v1/artists/{id}/albums",
    &[
        ParamSlot::path("id"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
        ParamSlot::query("market"),
        ParamSlot::query_list("album_type"),
    ],
);

pub(super) const GET_TOP_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "get_top_tracks",
    Method::Get,
    "/v1/artists/{id}/top-tracks",
    &[ParamSlot::path("id"), ParamSlot::query("country")],
);

pub(super) const GET_RELATED_ARTISTS: OperationDescriptor = OperationDescriptor::new(
    "get_related_artists",
    Method::Get,
    "/v1/artists/{id}/related-artists",
    &[ParamSlot::path("id")],
);

/// Optional filters for [`ArtistsApi::get_artist_albums`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistAlbumsQuery<'q> {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub market: Option<&'q str>,
    /// Sent only when non-empty.
    pub album_types: Vec<AlbumType>,
}

/// Artist catalog lookups.
#[derive(Debug, Clone, Copy)]
pub struct ArtistsApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> ArtistsApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_artist(&self, id: &str) -> Result<Artist, SpotifyError> {
        self.client
            .execute(&GET_ARTIST, Args::new().with("id", id))
            .await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn get_several_artists(&self, ids: &[&str]) -> Result<Artists, SpotifyError> {
        self.client
            .execute(&GET_SEVERAL_ARTISTS, Args::new().with("ids", ids))
            .await
    }

    /// Gets one page of an artist's albums.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotify_rs::{SpotifyClient, AlbumType, ArtistAlbumsQuery};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SpotifyClient::new("access_token")?;
    /// let singles = client
    ///     .artists()
    ///     .get_artist_albums(
    ///         "1vCWHaC5f2uS3yhpwWbIA6",
    ///         &ArtistAlbumsQuery {
    ///             market: Some("BR"),
    ///             album_types: vec![AlbumType::Single],
    ///             ..Default::default()
    ///         },
    ///     )
    ///     .await?;
    /// println!("{} singles", singles.total);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_artist_albums(
        &self,
        id: &str,
        query: &ArtistAlbumsQuery<'_>,
    ) -> Result<Page<AlbumSimplified>, SpotifyError> {
        let album_types = (!query.album_types.is_empty()).then_some(query.album_types.as_slice());
        let args = Args::new()
            .with("id", id)
            .with_opt("limit", query.limit)
            .with_opt("offset", query.offset)
            .with_opt("market", query.market)
            .with_opt("album_type", album_types);
        self.client.execute(&GET_ARTIST_ALBUMS, args).await
    }

    /// Gets an artist's top tracks in `country`.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_top_tracks(&self, id: &str, country: &str) -> Result<Tracks, SpotifyError> {
        let args = Args::new().with("id", id).with("country", country);
        self.client.execute(&GET_TOP_TRACKS, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_related_artists(&self, id: &str) -> Result<Artists, SpotifyError> {
        self.client
            .execute(&GET_RELATED_ARTISTS, Args::new().with("id", id))
            .await
    }
}
