use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Artist, CursorPage, Page, PlayHistory, TimeRange, Track};

pub(super) const TOP_ARTISTS: OperationDescriptor = OperationDescriptor::new(
    "top_artists",
    Method::Get,
    "/v1/me/top/artists",
    &[
        ParamSlot::query("time_range"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

pub(super) const TOP_TRACKS: OperationDescriptor = OperationDescriptor::new(
    "top_tracks",
    Method::Get,
    "/v1/me/top/tracks",
    &[
        ParamSlot::query("time_range"),
        ParamSlot::query("limit"),
        ParamSlot::query("offset"),
    ],
);

pub(super) const RECENTLY_PLAYED: OperationDescriptor = OperationDescriptor::new(
    "recently_played",
    Method::Get,
    "/v1/me/player/recently-played",
    &[
        ParamSlot::query("limit"),
        ParamSlot::query("after"),
        ParamSlot::query("before"),
    ],
);

/// The current user's listening affinities and history.
#[derive(Debug, Clone, Copy)]
pub struct PersonalizationApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> PersonalizationApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn top_artists(
        &self,
        time_range: Option<TimeRange>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Artist>, SpotifyError> {
        let args = Args::new()
            .with_opt("time_range", time_range)
            .with_opt("limit", limit)
            .with_opt("offset", offset);
        self.client.execute(&TOP_ARTISTS, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn top_tracks(
        &self,
        time_range: Option<TimeRange>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Track>, SpotifyError> {
        let args = Args::new()
            .with_opt("time_range", time_range)
            .with_opt("limit", limit)
            .with_opt("offset", offset);
        self.client.execute(&TOP_TRACKS, args).await
    }

    /// Recently played tracks. `after` and `before` are Unix timestamps in
    /// milliseconds; the API accepts at most one of them.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if both `after` and `before` are
    /// given; otherwise see [`SpotifyClient::execute`].
    pub async fn recently_played(
        &self,
        limit: Option<u32>,
        after: Option<i64>,
        before: Option<i64>,
    ) -> Result<CursorPage<PlayHistory>, SpotifyError> {
        if after.is_some() && before.is_some() {
            return Err(SpotifyError::InvalidArgument(
                "recently_played: `after` and `before` are mutually exclusive".to_string(),
            ));
        }
        let args = Args::new()
            .with_opt("limit", limit)
            .with_opt("after", after)
            .with_opt("before", before);
        self.client.execute(&RECENTLY_PLAYED, args).await
    }
}
