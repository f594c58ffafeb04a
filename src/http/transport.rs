//! The pluggable component that actually sends bytes over the network.

use super::{Headers, Method, Request, Response};
use crate::errors::{NetworkError, SpotifyError};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;

/// Sends one request and returns the raw response.
///
/// Implementations own timeouts and cancellation and must report them as
/// [`NetworkError`]. Any status code, including 4xx/5xx, is a successful
/// transport round-trip; interpreting it is the client's job.
///
/// # Example
///
/// ```ignore
/// struct Canned(Response);
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn execute(&self, _request: Request) -> Result<Response, NetworkError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, NetworkError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    #[allow(clippy::struct_field_names)]
    http_client: ReqwestClient,
}

impl ReqwestTransport {
    /// Wraps an already configured reqwest client.
    #[must_use]
    pub fn new(http_client: ReqwestClient) -> Self {
        Self { http_client }
    }

    /// Builds a reqwest client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::ClientBuild`] if the TLS backend can't be initialized.
    pub fn with_timeouts(
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, SpotifyError> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| SpotifyError::ClientBuild(e.to_string()))?;

        Ok(Self { http_client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(ReqwestClient::new())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, NetworkError> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http_client.request(method, request.url());
        for (name, values) in request.headers() {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send().await.map_err(network_error)?;

        let status = response.status();
        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }
        let body = response.bytes().await.map_err(network_error)?;

        Ok(Response {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

fn network_error(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout(err.to_string())
    } else if err.is_connect() {
        NetworkError::Connect(err.to_string())
    } else {
        NetworkError::Other(err.to_string())
    }
}
