//! The operation catalog, one module per API area.
//!
//! Each module holds the `const` [`OperationDescriptor`]s for its endpoints
//! and a thin typed facade over [`SpotifyClient::execute`]. The facades only
//! assemble [`Args`](crate::binding::Args); every call goes through the same
//! dispatch path.

mod albums;
mod artists;
mod browse;
mod follow;
mod library;
mod personalization;
mod profiles;
mod tracks;

pub use albums::AlbumsApi;
pub use artists::{ArtistAlbumsQuery, ArtistsApi};
pub use browse::{BrowseApi, BrowseQuery};
pub use follow::FollowApi;
pub use library::LibraryApi;
pub use personalization::PersonalizationApi;
pub use profiles::ProfilesApi;
pub use tracks::TracksApi;

use crate::binding::OperationDescriptor;

/// Every descriptor in the catalog.
pub const ALL: &[&OperationDescriptor] = &[
    &albums::GET_ALBUM,
    &albums::GET_SEVERAL_ALBUMS,
    &albums::GET_ALBUM_TRACKS,
    &artists::GET_ARTIST,
    &artists::GET_SEVERAL_ARTISTS,
    &artists::GET_ARTIST_ALBUMS,
    &artists::GET_TOP_TRACKS,
    &artists::GET_RELATED_ARTISTS,
    &browse::FEATURED_PLAYLISTS,
    &browse::NEW_RELEASES,
    &browse::CATEGORIES,
    &browse::CATEGORY,
    &browse::CATEGORY_PLAYLISTS,
    &follow::FOLLOWED_ARTISTS,
    &follow::FOLLOW,
    &follow::UNFOLLOW,
    &follow::IS_FOLLOWING,
    &follow::FOLLOW_PLAYLIST,
    &follow::UNFOLLOW_PLAYLIST,
    &follow::IS_FOLLOWING_PLAYLIST,
    &library::SAVE_TRACKS,
    &library::GET_SAVED_TRACKS,
    &library::REMOVE_SAVED_TRACKS,
    &library::ARE_TRACKS_SAVED,
    &library::SAVE_ALBUMS,
    &library::GET_SAVED_ALBUMS,
    &library::REMOVE_SAVED_ALBUMS,
    &library::ARE_ALBUMS_SAVED,
    &personalization::TOP_ARTISTS,
    &personalization::TOP_TRACKS,
    &personalization::RECENTLY_PLAYED,
    &profiles::ME,
    &profiles::GET_USER,
    &tracks::GET_TRACK,
    &tracks::GET_SEVERAL_TRACKS,
];
