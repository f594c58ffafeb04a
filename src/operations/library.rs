use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Page, SavedAlbum, SavedTrack};

pub(super) const SAVE_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "save_tracks",
    Method::Put,
    "/v1/me/tracks",
    &[ParamSlot::query_list("ids")],
);

pub(super) const GET_SAVED_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "get_saved_tracks",
    Method::Get,
    "/v1/me/tracks",
    &[
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
        ParamSlot::query("market"),
    ],
);

pub(super) const REMOVE_SAVED_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "remove_saved_tracks",
    Method::Delete,
    "/v1/me/tracks",
    &[ParamSlot::query_list("ids")],
);

pub(super) const ARE_TRACKS_SAVED: OperationDescriptor = OperationDescriptor::new(
    "are_tracks_saved",
    Method::Get,
    "/v1/me/tracks/contains",
    &[ParamSlot::query_list("ids")],
);

pub(super) const SAVE_ALBUMS: OperationDescriptor = OperationDescriptor::new(
    "save_albums",
    Method::Put,
    "/v1/me/albums",
    &[ParamSlot::query_list("ids")],
);

pub(super) const GET_SAVED_ALBUMS: OperationDescriptor = OperationDescriptor::new(
    "get_saved_albums",
    Method::Get,
    "/v1/me/albums",
    &[
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
        ParamSlot::query("market"),
    ],
);

pub(super) const REMOVE_SAVED_ALBUMS: OperationDescriptor = OperationDescriptor::new(
    "remove_saved_albums",
    Method::Delete,
    "/v1/me/albums",
    &[ParamSlot::query_list("ids")],
);

pub(super) const ARE_ALBUMS_SAVED: OperationDescriptor = OperationDescriptor::new(
    "are_albums_saved",
    Method::Get,
    "/v1/me/albums/contains",
    &[ParamSlot::query_list("ids")],
);

/// The current user's saved tracks and albums.
#[derive(Debug, Clone, Copy)]
pub struct LibraryApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> LibraryApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn save_tracks(&self, ids: &[&str]) -> Result<(), SpotifyError> {
        self.client
            .execute_void(&SAVE_TRACKS, Args::new().with("ids", ids))
            .await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_saved_tracks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Page<SavedTrack>, SpotifyError> {
        let args = Args::new()
            .with_opt("limit", limit)
            .with_opt("offset", offset)
            .with_opt("market", market);
        self.client.execute(&GET_SAVED_TRACKS, args).await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn remove_saved_tracks(&self, ids: &[&str]) -> Result<(), SpotifyError> {
        self.client
            .execute_void(&REMOVE_SAVED_TRACKS, Args::new().with("ids", ids))
            .await
    }

    /// `result[i]` tells whether `ids[i]` is saved.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn are_tracks_saved(&self, ids: &[&str]) -> Result<Vec<bool>, SpotifyError> {
        self.client
            .execute(&ARE_TRACKS_SAVED, Args::new().with("ids", ids))
            .await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn save_albums(&self, ids: &[&str]) -> Result<(), SpotifyError> {
        self.client
            .execute_void(&SAVE_ALBUMS, Args::new().with("ids", ids))
            .await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_saved_albums(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Page<SavedAlbum>, SpotifyError> {
        let args = Args::new()
            .with_opt("limit", limit)
            .with_opt("offset", offset)
            .with_opt("market", market);
        self.client.execute(&GET_SAVED_ALBUMS, args).await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn remove_saved_albums(&self, ids: &[&str]) -> Result<(), SpotifyError> {
        self.client
            .execute_void(&REMOVE_SAVED_ALBUMS, Args::new().with("ids", ids))
            .await
    }

    /// `result[i]` tells whether `ids[i]` is saved.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn are_albums_saved(&self, ids: &[&str]) -> Result<Vec<bool>, SpotifyError> {
        self.client
            .execute(&ARE_ALBUMS_SAVED, Args::new().with("ids", ids))
            .await
    }
}
