use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{Artist, CursorPage, FollowType, FollowedArtists};

pub(super) const FOLLOWED_ARTISTS: OperationDescriptor = OperationDescriptor::new(
    "followed_artists",
    Method::Get,
    "/v1/me/following?type=artist",
    &[ParamSlot::query("limit"), ParamSlot::query("after")],
);

pub(super) const FOLLOW: OperationDescriptor = OperationDescriptor::new(
    "follow",
    Method::Put,
    "/v1/me/following",
    &[ParamSlot::query("type"), ParamSlot::query_list("ids")],
);

pub(super) const UNFOLLOW: OperationDescriptor = OperationDescriptor::new(
    "unfollow",
    Method::Delete,
    "/v1/me/following",
    &[ParamSlot::query("type"), ParamSlot::query_list("ids")],
);

pub(super) const IS_FOLLOWING: OperationDescriptor = OperationDescriptor::new(
    "is_following",
    Method::Get,
    "/v1/me/following/contains",
    &[ParamSlot::query("type"), ParamSlot::query_list("ids")],
);

pub(super) const FOLLOW_PLAYLIST: OperationDescriptor = OperationDescriptor::new(
    "follow_playlist",
    Method::Put,
    "/v1/users/{owner_id}/playlists/{playlist_id}/followers",
    &[
        ParamSlot::path("owner_id"),
        ParamSlot::path("playlist_id"),
        ParamSlot::body("public"),
    ],
)
.with_json_body(r#"{"public": {public}}"#);

pub(super) const UNFOLLOW_PLAYLIST: OperationDescriptor = OperationDescriptor::new(
    "unfollow_playlist",
    Method::Delete,
    "/v1/users/{owner_id}/playlists/{playlist_id}/followers",
    &[ParamSlot::path("owner_id"), ParamSlot::path("playlist_id")],
);

pub(super) const IS_FOLLOWING_PLAYLIST: OperationDescriptor = OperationDescriptor::new(
    "is_following_playlist",
    Method::Get,
    "/v1/users/{owner_id}/playlists/{playlist_id}/followers/contains",
    &[
        ParamSlot::path("owner_id"),
        ParamSlot::path("playlist_id"),
        ParamSlot::query_list("ids"),
    ],
);

/// Follow relationships of the current user with artists, users and
/// playlists.
#[derive(Debug, Clone, Copy)]
pub struct FollowApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> FollowApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// Gets the artists the current user follows, starting after the
    /// artist ID `after`.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn followed_artists(
        &self,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<FollowedArtists, SpotifyError> {
        let args = Args::new()
            .with_opt("limit", limit)
            .with_opt("after", after);
        self.client.execute(&FOLLOWED_ARTISTS, args).await
    }

    /// Like [`followed_artists`](Self::followed_artists), returning the page
    /// itself.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn followed_artists_page(
        &self,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<CursorPage<Artist>, SpotifyError> {
        self.followed_artists(limit, after)
            .await
            .map(|followed| followed.artists)
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn follow(&self, kind: FollowType, ids: &[&str]) -> Result<(), SpotifyError> {
        let args = Args::new().with("type", kind).with("ids", ids);
        self.client.execute_void(&FOLLOW, args).await
    }

    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn unfollow(&self, kind: FollowType, ids: &[&str]) -> Result<(), SpotifyError> {
        let args = Args::new().with("type", kind).with("ids", ids);
        self.client.execute_void(&UNFOLLOW, args).await
    }

    /// Checks each of `ids`; `result[i]` answers `ids[i]`.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `ids` is empty; otherwise see
    /// [`SpotifyClient::execute`].
    pub async fn is_following(
        &self,
        kind: FollowType,
        ids: &[&str],
    ) -> Result<Vec<bool>, SpotifyError> {
        let args = Args::new().with("type", kind).with("ids", ids);
        self.client.execute(&IS_FOLLOWING, args).await
    }

    /// Follows a playlist, publicly or privately.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn follow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        public: bool,
    ) -> Result<(), SpotifyError> {
        let args = Args::new()
            .with("owner_id", owner_id)
            .with("playlist_id", playlist_id)
            .with("public", public);
        self.client.execute_void(&FOLLOW_PLAYLIST, args).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn unfollow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
    ) -> Result<(), SpotifyError> {
        let args = Args::new()
            .with("owner_id", owner_id)
            .with("playlist_id", playlist_id);
        self.client.execute_void(&UNFOLLOW_PLAYLIST, args).await
    }

    /// Checks whether each of `user_ids` follows the playlist.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] if `user_ids` is empty; otherwise
    /// see [`SpotifyClient::execute`].
    pub async fn is_following_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        user_ids: &[&str],
    ) -> Result<Vec<bool>, SpotifyError> {
        let args = Args::new()
            .with("owner_id", owner_id)
            .with("playlist_id", playlist_id)
            .with("ids", user_ids);
        self.client.execute(&IS_FOLLOWING_PLAYLIST, args).await
    }
}
