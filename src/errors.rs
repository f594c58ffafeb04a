use thiserror::Error;

/// Defines errors that can occur when calling the Spotify Web API.
///
/// Every operation returns one of these; the client never retries and never
/// swallows a failure.
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match client.albums().get_album("4aawyAB9vmqN3uQ7FjRGTy", None).await {
///     Err(SpotifyError::Api { status_code: 429, .. }) => {
///         tracing::warn!("Rate limited");
///         // Retry with backoff
///     }
///     Err(SpotifyError::Api { status_code, message }) => {
///         tracing::error!("API error {}: {}", status_code, message);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpotifyError {
    /// A call-time argument was rejected before any network activity,
    /// e.g. an empty ID list or a missing path argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The API rejected the call and returned a decodable error body.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 400, 404, 429)
        status_code: u16,
        /// Message from the error payload
        message: String,
    },
    /// The call failed below the API level: either the connection failed,
    /// or a non-2xx response carried a body that wasn't the error shape.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A successful response body didn't match the expected shape.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Failures that aren't reported by the API itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Non-2xx response whose body couldn't be decoded as an API error.
    #[error("HTTP {status_code} {reason}")]
    Status { status_code: u16, reason: String },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

/// Connection-level failures raised by a [`Transport`](crate::Transport).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetworkError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Other(String),
}

impl From<NetworkError> for SpotifyError {
    fn from(err: NetworkError) -> Self {
        SpotifyError::Transport(TransportError::Network(err))
    }
}

impl SpotifyError {
    /// Returns `true` if this error is likely transient and the request may succeed on retry.
    ///
    /// - **Network errors**: connection resets, DNS hiccups, timeouts
    /// - **Rate limits (429)** and **server errors (5xx)**, whether or not the
    ///   body decoded
    ///
    /// Everything else is a permanent failure for the given input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spotify_rs::SpotifyError;
    ///
    /// let rate_limited = SpotifyError::Api {
    ///     status_code: 429,
    ///     message: "API rate limit exceeded".to_string(),
    /// };
    /// assert!(rate_limited.is_retryable());
    ///
    /// let not_found = SpotifyError::Api {
    ///     status_code: 404,
    ///     message: "non existing id".to_string(),
    /// };
    /// assert!(!not_found.is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            SpotifyError::Transport(TransportError::Network(_)) => true,
            SpotifyError::Api { status_code, .. }
            | SpotifyError::Transport(TransportError::Status { status_code, .. }) => {
                *status_code == 429 || *status_code >= 500
            }
            SpotifyError::InvalidArgument(_)
            | SpotifyError::MalformedResponse(_)
            | SpotifyError::ClientBuild(_) => false,
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SpotifyError::Api { status_code, .. }
            | SpotifyError::Transport(TransportError::Status { status_code, .. }) => {
                Some(*status_code)
            }
            _ => None,
        }
    }
}
