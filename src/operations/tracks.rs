use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Track, Tracks};

pub(super) const GET_TRACK: OperationDescriptor = OperationDescriptor::new(
    "get_track",
    Method::Get,
    "/v1/tracks/{id}",
    &[ParamSlot::path("id"), ParamSlot::query("market")],
);

pub(super) const GET_SEVERAL_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "get_several_tracks",
    Method::Get,
    "/v1/tracks/",
    &[ParamSlot::query_list("ids"), ParamSlot::query("market")],
);

/// Track catalog lookups.
#[derive(Debug, Clone, Copy)]
pub struct TracksApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> TracksApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_track(&self, id: &str, market: Option<&str>) -> Result<Track, SpotifyError> {
        let args = Args::new().with("id", id).with_opt("market", market);
        self.client.execute(&GET_TRACK, args).await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn get_several_tracks(
        &self,
        ids: &[&str],
        market: Option<&str>,
    ) -> Result<Tracks, SpotifyError> {
        let args = Args::new().with("ids", ids).with_opt("market", market);
        self.client.execute(&GET_SEVERAL_TRACKS, args).await
    }
}
