use crate::binding::{Args, OperationDescriptor, RequestBuilder};
use crate::decode::{Decoder, JsonDecoder, decode_error};
use crate::errors::SpotifyError;
use crate::http::common::BASE_URL;
use crate::http::wire_log;
use crate::http::{ReqwestTransport, Response, Transport};
use crate::interceptor::{BearerAuth, RequestInterceptor};
use crate::operations::{
    AlbumsApi, ArtistsApi, BrowseApi, FollowApi, LibraryApi, PersonalizationApi, ProfilesApi,
    TracksApi,
};
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// The client for the Spotify Web API.
///
/// Cheap to clone; clones share the transport and interceptors. Holds no
/// per-call state, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct SpotifyClient<D = JsonDecoder> {
    base_url: String,
    transport: Arc<dyn Transport>,
    interceptors: Arc<[Arc<dyn RequestInterceptor>]>,
    decoder: D,
}

impl<D: std::fmt::Debug> std::fmt::Debug for SpotifyClient<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors)
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

/// Builder for `SpotifyClient` instances.
///
/// # Example
///
/// ```
/// use spotify_rs::SpotifyClient;
/// use std::time::Duration;
///
/// let client = SpotifyClient::builder("access_token")
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// ```
pub struct ClientBuilder<D = JsonDecoder> {
    access_token: String,
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    decoder: D,
    transport: Option<Arc<dyn Transport>>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl<D: std::fmt::Debug> std::fmt::Debug for ClientBuilder<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("decoder", &self.decoder)
            .field("custom_transport", &self.transport.is_some())
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

impl<D: Decoder> ClientBuilder<D> {
    /// Overrides the API root, e.g. to point at a local test server.
    ///
    /// Defaults to `https://api.spotify.com`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the total request timeout.
    ///
    /// This is the maximum time a request can take from start to finish,
    /// including connection time, sending the request, and receiving the response.
    ///
    /// If not set, uses reqwest's default (no timeout). Ignored when a custom
    /// transport is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default. Ignored when a custom transport is
    /// supplied.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Replaces the response decoder.
    #[must_use]
    pub fn decoder<E: Decoder>(self, decoder: E) -> ClientBuilder<E> {
        ClientBuilder {
            access_token: self.access_token,
            base_url: self.base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            decoder,
            transport: self.transport,
            interceptors: self.interceptors,
        }
    }

    /// Sends requests through `transport` instead of the default reqwest one.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = SpotifyClient::builder("token")
    ///     .transport(MockTransport::new())
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Adds an interceptor. Interceptors run in the order added, after the
    /// bearer auth one.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Builds the `SpotifyClient`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::ClientBuild`] if the access token is empty or
    /// can't be sent as a header value (e.g. it contains a newline), or if
    /// the HTTP client can't be constructed.
    pub fn build(self) -> Result<SpotifyClient<D>, SpotifyError> {
        if self.access_token.trim().is_empty() {
            return Err(SpotifyError::ClientBuild(
                "access token must not be empty".to_string(),
            ));
        }
        HeaderValue::from_str(&format!("Bearer {}", self.access_token)).map_err(|_| {
            SpotifyError::ClientBuild("access token is not a valid header value".to_string())
        })?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeouts(
                self.timeout,
                self.connect_timeout,
            )?),
        };

        let mut interceptors: Vec<Arc<dyn RequestInterceptor>> =
            Vec::with_capacity(self.interceptors.len() + 1);
        interceptors.push(Arc::new(BearerAuth::new(self.access_token)));
        interceptors.extend(self.interceptors);

        Ok(SpotifyClient {
            base_url: self.base_url,
            transport,
            interceptors: interceptors.into(),
            decoder: self.decoder,
        })
    }
}

impl SpotifyClient {
    /// Creates a new builder for `SpotifyClient` instances.
    ///
    /// # Arguments
    ///
    /// * `access_token` - An OAuth access token with the scopes the calls need.
    #[must_use]
    pub fn builder(access_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            access_token: access_token.into(),
            base_url: BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            decoder: JsonDecoder,
            transport: None,
            interceptors: Vec::new(),
        }
    }

    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(access_token: impl Into<String>) -> Result<Self, SpotifyError> {
        Self::builder(access_token).build()
    }
}

impl<D: Decoder> SpotifyClient<D> {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one operation and decodes its success body as `T`.
    ///
    /// Checks `op` for consistency, builds the request from `op` and `args`,
    /// passes it through every interceptor, sends it and decodes the
    /// response. Non-2xx responses go through [`decode_error`].
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::InvalidArgument`] if `op` is inconsistent or the
    ///   arguments don't fit it; nothing is sent in that case.
    /// - [`SpotifyError::Transport`] on network failure or an undecodable
    ///   error response.
    /// - [`SpotifyError::Api`] when the API returns an error message.
    /// - [`SpotifyError::MalformedResponse`] if a success body doesn't match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        op: &OperationDescriptor,
        args: Args,
    ) -> Result<T, SpotifyError> {
        let response = self.dispatch(op, args).await?;
        self.decoder.decode(&response)
    }

    /// Runs an operation whose success body carries nothing of interest.
    ///
    /// Any 2xx is success; the body is never read.
    ///
    /// # Errors
    ///
    /// As [`execute`](Self::execute), except
    /// [`SpotifyError::MalformedResponse`] is never returned.
    pub async fn execute_void(
        &self,
        op: &OperationDescriptor,
        args: Args,
    ) -> Result<(), SpotifyError> {
        self.dispatch(op, args).await.map(|_| ())
    }

    /// Sends one call and returns its 2xx response, or the decoded error.
    async fn dispatch(
        &self,
        op: &OperationDescriptor,
        args: Args,
    ) -> Result<Response, SpotifyError> {
        op.validate()?;
        let request = RequestBuilder::new(&self.base_url).build(op, &args)?;
        let request = self
            .interceptors
            .iter()
            .fold(request, |request, interceptor| interceptor.apply(request));

        tracing::debug!(
            operation = op.name,
            method = %request.method(),
            url = request.url(),
            "Sending request"
        );

        let request_id = wire_log::next_request_id();
        wire_log::log_request(request_id, &request);

        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(operation = op.name, error = %e, "Request failed before a response");
            SpotifyError::from(e)
        })?;

        wire_log::log_response(request_id, &response);
        tracing::debug!(
            operation = op.name,
            status = response.status,
            bytes = response.body.len(),
            "Received response"
        );

        if response.is_success() {
            Ok(response)
        } else {
            let error = decode_error(&self.decoder, &response);
            tracing::warn!(operation = op.name, status = response.status, error = %error, "API call failed");
            Err(error)
        }
    }

    // --- Operation groups ---

    #[must_use]
    pub const fn albums(&self) -> AlbumsApi<'_, D> {
        AlbumsApi::new(self)
    }

    #[must_use]
    pub const fn artists(&self) -> ArtistsApi<'_, D> {
        ArtistsApi::new(self)
    }

    #[must_use]
    pub const fn browse(&self) -> BrowseApi<'_, D> {
        BrowseApi::new(self)
    }

    #[must_use]
    pub const fn follow(&self) -> FollowApi<'_, D> {
        FollowApi::new(self)
    }

    #[must_use]
    pub const fn library(&self) -> LibraryApi<'_, D> {
        LibraryApi::new(self)
    }

    #[must_use]
    pub const fn personalization(&self) -> PersonalizationApi<'_, D> {
        PersonalizationApi::new(self)
    }

    #[must_use]
    pub const fn profiles(&self) -> ProfilesApi<'_, D> {
        ProfilesApi::new(self)
    }

    #[must_use]
    pub const fn tracks(&self) -> TracksApi<'_, D> {
        TracksApi::new(self)
    }
}
