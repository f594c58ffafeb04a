use crate::binding::{Args, OperationDescriptor, ParamSlot};
use crate::client::SpotifyClient;
use crate::decode::{Decoder, JsonDecoder};
use crate::errors::SpotifyError;
use crate::http::Method;
use crate::models::{UserPrivate, UserPublic};

pub(super) const ME: OperationDescriptor =
    OperationDescriptor::new("me", Method::Get, "/v1/me", &[]);

pub(super) const GET_USER: OperationDescriptor = OperationDescriptor::new(
    "get_user",
    Method::Get,
    "/v1/users/{id}",
    &[ParamSlot::path("id")],
);

/// User profiles.
#[derive(Debug, Clone, Copy)]
pub struct ProfilesApi<'a, D = JsonDecoder> {
    client: &'a SpotifyClient<D>,
}

impl<'a, D: Decoder> ProfilesApi<'a, D> {
    pub(crate) const fn new(client: &'a SpotifyClient<D>) -> Self {
        Self { client }
    }

    /// Profile of the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn me(&self) -> Result<UserPrivate, SpotifyError> {
        self.client.execute(&ME, Args::new()).await
    }

    /// # Errors
    ///
    /// See [`SpotifyClient::execute`].
    pub async fn get_user(&self, id: &str) -> Result<UserPublic, SpotifyError> {
        self.client
            .execute(&GET_USER, Args::new().with("id", id))
            .await
    }
}
