//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! Most tests run against [`MockTransport`], which records every request the
//! client sends and answers from a scripted queue. Nothing touches the
//! network unless a test opts in with `SPOTIFY_ACCESS_TOKEN`.

#![allow(dead_code)]

use spotify_rs::{NetworkError, Request, Response, SpotifyClient, Transport, async_trait};
use std::collections::VecDeque;
use std::env;
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Token the mock-backed clients are built with.
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Default API root; request URLs start with this.
pub const BASE_URL: &str = "https://api.spotify.com";

/// Default timeout for tests that hit the live API.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Mock Transport
// =============================================================================

#[derive(Default)]
struct MockState {
    script: VecDeque<Result<Response, NetworkError>>,
    requests: Vec<Request>,
}

/// Scripted in-memory transport.
///
/// Clones share state, so keep one handle in the test and give a clone to
/// the client.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        let body: String = body.into();
        self.push(Ok(Response::new(status, body)))
    }

    /// Queues a `200 OK` with the contents of `tests/fixtures/<name>`.
    pub fn respond_fixture(&self, name: &str) -> &Self {
        self.respond(200, fixture(name))
    }

    /// Queues a `204 No Content` with an empty body.
    pub fn respond_no_content(&self) -> &Self {
        self.respond(204, "")
    }

    /// Queues a transport-level failure.
    pub fn fail(&self, error: NetworkError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, outcome: Result<Response, NetworkError>) -> &Self {
        self.state.lock().unwrap().script.push_back(outcome);
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// The most recent request.
    ///
    /// # Panics
    ///
    /// Panics if nothing was sent.
    pub fn last_request(&self) -> Request {
        self.requests()
            .pop()
            .expect("no request reached the transport")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response, NetworkError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .script
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::Other("mock script exhausted".to_string())))
    }
}

/// A client wired to `transport`.
pub fn mock_client(transport: &MockTransport) -> SpotifyClient {
    SpotifyClient::builder(ACCESS_TOKEN)
        .transport(transport.clone())
        .build()
        .expect("client should build")
}

/// The request's URL without the API root.
pub fn path_and_query(request: &Request) -> &str {
    request
        .url()
        .strip_prefix(BASE_URL)
        .unwrap_or_else(|| panic!("unexpected base in {}", request.url()))
}

/// Asserts the request carries exactly the expected bearer token.
pub fn assert_bearer(request: &Request) {
    assert_eq!(
        request.header_values("Authorization"),
        vec![format!("Bearer {ACCESS_TOKEN}").as_str()],
        "{request:?}"
    );
}

// =============================================================================
// Fixtures
// =============================================================================

/// Reads `tests/fixtures/<name>`.
pub fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

// =============================================================================
// Live API
// =============================================================================

/// Creates a client from the SPOTIFY_ACCESS_TOKEN environment variable.
/// Returns None if the token is not set.
pub fn get_live_client() -> Option<SpotifyClient> {
    env::var("SPOTIFY_ACCESS_TOKEN").ok().map(|token| {
        SpotifyClient::builder(token)
            .timeout(TEST_TIMEOUT)
            .build()
            .expect("client should build")
    })
}

/// Wraps a future with a timeout, panicking if the timeout is exceeded.
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, future)
        .await
        .unwrap_or_else(|_| panic!("Test timed out after {:?}", duration))
}
