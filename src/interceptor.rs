//! Request interceptors run between request building and dispatch.

use crate::http::Request;
use crate::http::common::AUTHORIZATION_HEADER;

/// Transforms every outgoing request, after it's built and before the
/// transport sees it.
pub trait RequestInterceptor: Send + Sync + std::fmt::Debug {
    fn apply(&self, request: Request) -> Request;
}

/// Adds `Authorization: Bearer <token>` to every request.
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Keeps the token out of debug output.
impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RequestInterceptor for BearerAuth {
    fn apply(&self, request: Request) -> Request {
        request.with_header(AUTHORIZATION_HEADER, format!("Bearer {}", self.token))
    }
}
