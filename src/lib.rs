//! Typed async client for the Spotify Web API.
//!
//! Every endpoint is a `const` [`OperationDescriptor`](binding::OperationDescriptor)
//! dispatched through one generic path: build the request, run the
//! interceptors (bearer auth first), send it through a [`Transport`], then
//! decode the body or the error.
//!
//! ```no_run
//! use spotify_rs::SpotifyClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), spotify_rs::SpotifyError> {
//! let client = SpotifyClient::new("access_token")?;
//! let album = client.albums().get_album("2BTZIqw0ntH9MvilQ3ewNY", Some("BR")).await?;
//! println!("{} ({} tracks)", album.name, album.tracks.total);
//! # Ok(())
//! # }
//! ```
//!
//! Set `LOUD_WIRE=1` to dump every request and response to stderr.

pub mod binding;
mod client;
mod decode;
mod errors;
mod http;
mod interceptor;
pub mod models;
pub mod operations;

pub use client::{ClientBuilder, SpotifyClient};
pub use decode::{Decoder, JsonDecoder, decode_error};
pub use errors::{NetworkError, SpotifyError, TransportError};
pub use http::{Headers, Method, Request, Response, ReqwestTransport, Transport};
pub use interceptor::{BearerAuth, RequestInterceptor};
pub use models::{
    Album, AlbumSimplified, AlbumType, Albums, Artist, ArtistSimplified, Artists, Categories,
    Category, Cursor, CursorPage, FollowType, FollowedArtists, NewReleases, Page, PlayHistory,
    PlaylistSimplified, Playlists, SavedAlbum, SavedTrack, TimeRange, Track, TrackSimplified,
    Tracks, UserPrivate, UserPublic,
};
pub use operations::{ArtistAlbumsQuery, BrowseQuery};

// Re-exported so `Transport` implementors don't need their own dependency.
pub use async_trait::async_trait;
