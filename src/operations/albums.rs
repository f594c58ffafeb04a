use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Album, Albums, Page, TrackSimplified};

pub(super) const GET_ALBUM: OperationDescriptor = OperationDescriptor::new(
    "get_album",
    Method::Get,
    "/v1/albums/{id}",
    &[ParamSlot::path("id"), ParamSlot::query("market")],
);

pub(super) const GET_SEVERAL_ALBUMS: OperationDescriptor = OperationDescriptor::new(
    "get_several_albums",
    Method::Get,
    "/v1/albums/",
    &[ParamSlot::query_list("ids"), ParamSlot::query("market")],
);

pub(super) const GET_ALBUM_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "get_album_tracks",
    Method::Get,
    "/v1/albums/{id}/tracks",
    &[
        ParamSlot::path("id"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
        ParamSlot::query("market"),
    ],
);

/// Album catalog lookups.
#[derive(Debug, Clone, Copy)]
pub struct AlbumsApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> AlbumsApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// Gets one album. `market` is an ISO 3166-1 alpha-2 country code used
    /// for track relinking.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_album(&self, id: &str, market: Option<&str>) -> Result<Album, SpotifyError> {
        let args = Args::new().with("id", id).with_opt("market", market);
        self.client.execute(&GET_ALBUM, args).await
    }

    /// Gets several albums in one call. Unknown IDs yield `None` at their
    /// position.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn get_several_albums(
        &self,
        ids: &[&str],
        market: Option<&str>,
    ) -> Result<Albums, SpotifyError> {
        let args = Args::new().with("ids", ids).with_opt("market", market);
        self.client.execute(&GET_SEVERAL_ALBUMS, args).await
    }

    /// Gets one page of an album's tracks.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_album_tracks(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Page<TrackSimplified>, SpotifyError> {
        let args = Args::new()
            .with("id", id)
            .with_opt("limit", limit)
            .with_opt("offset", offset)
            .with_opt("market", market);
        self.client.execute(&GET_ALBUM_TRACKS, args).await
    }
}
