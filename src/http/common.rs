// --- URL Construction ---
pub const BASE_URL: &str = "https://api.spotify.com";

/// Header carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Joins a base URL and an absolute path, tolerating a trailing slash on the base.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url(BASE_URL, "/v1/albums/abc"),
            "https://api.spotify.com/v1/albums/abc"
        );
    }

    #[test]
    fn test_join_url_trailing_slash_is_stripped() {
        assert_eq!(
            join_url("http://localhost:8080/", "/v1/me"),
            "http://localhost:8080/v1/me"
        );
    }
}
