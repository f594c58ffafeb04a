use super::expand::render_value;
use super::template;
use super::{Args, OperationDescriptor, Placement};
use crate::errors::SpotifyError;
use crate::http::common::{CONTENT_TYPE_HEADER, join_url};
use crate::http::{Headers, Request};
use bytes::Bytes;

/// Resolves descriptors against call arguments.
///
/// Holds only the base URL; it adds no auth, that's the interceptors' job.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    base_url: &'a str,
}

impl<'a> RequestBuilder<'a> {
    #[must_use]
    pub const fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }

    /// Builds the wire request for one call.
    ///
    /// - Path placeholders are replaced by their percent-encoded argument.
    /// - Query slots are appended in declaration order, only when present;
    ///   list values are expanded first and encoded as one unit.
    /// - Header slots become headers.
    /// - Body slots are substituted textually into the body template and
    ///   the template's content type is set.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::InvalidArgument`] for a missing path or body
    /// argument, an argument no slot declares, or a value the slot's
    /// expander rejects.
    pub fn build(&self, op: &OperationDescriptor, args: &Args) -> Result<Request, SpotifyError> {
        for name in args.names() {
            if op.slot(name).is_none() {
                return Err(SpotifyError::InvalidArgument(format!(
                    "operation `{}` has no parameter `{name}`",
                    op.name
                )));
            }
        }

        let path = template::render(op.template, |name| {
            let rendered = self.required(op, args, name, Placement::Path)?;
            Ok(urlencoding::encode(&rendered).into_owned())
        })?;

        let mut query = Vec::new();
        let mut headers = Headers::new();
        for slot in op.params {
            let Some(value) = args.get(slot.name) else {
                continue;
            };
            match slot.placement {
                Placement::Query => {
                    let rendered = render_value(slot.name, slot.expander, value)?;
                    query.push(format!("{}={}", slot.name, urlencoding::encode(&rendered)));
                }
                Placement::Header => {
                    let rendered = render_value(slot.name, slot.expander, value)?;
                    headers
                        .entry(slot.name.to_string())
                        .or_default()
                        .push(rendered);
                }
                Placement::Path | Placement::Body => {}
            }
        }

        let mut url = join_url(self.base_url, &path);
        if !query.is_empty() {
            url.push(if path.contains('?') { '&' } else { '?' });
            url.push_str(&query.join("&"));
        }

        let body = match op.body {
            Some(body) => {
                let rendered = template::render(body.template, |name| {
                    self.required(op, args, name, Placement::Body)
                })?;
                headers
                    .entry(CONTENT_TYPE_HEADER.to_string())
                    .or_default()
                    .push(body.content_type.to_string());
                Some(Bytes::from(rendered))
            }
            None => None,
        };

        Ok(Request::new(op.method, url, headers, body))
    }

    fn required(
        &self,
        op: &OperationDescriptor,
        args: &Args,
        name: &str,
        placement: Placement,
    ) -> Result<String, SpotifyError> {
        let slot = op
            .slot(name)
            .filter(|slot| slot.placement == placement)
            .ok_or_else(|| {
                SpotifyError::InvalidArgument(format!(
                    "operation `{}` declares no {placement:?} slot `{name}`",
                    op.name
                ))
            })?;
        let value = args.get(name).ok_or_else(|| {
            SpotifyError::InvalidArgument(format!(
                "operation `{}` is missing required argument `{name}`",
                op.name
            ))
        })?;
        render_value(slot.name, slot.expander, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ParamSlot;
    use crate::http::Method;

    const BASE: &str = "https://api.spotify.com";

    const GET_ALBUM: OperationDescriptor = OperationDescriptor::new(
        "get_album",
        Method::Get,
        "/v1/albums/{id}",
        &[ParamSlot::path("id"), ParamSlot::query("market")],
    );

    const GET_SEVERAL_ALBUMS: OperationDescriptor = OperationDescriptor::new(
        "get_several_albums",
        Method::Get,
        "/v1/albums/",
        &[ParamSlot::query_list("ids"), ParamSlot::query("market")],
    );

    const FOLLOW_ARTISTS: OperationDescriptor = OperationDescriptor::new(
        "follow_artists",
        Method::Put,
        "/v1/me/following?type=artist",
        &[ParamSlot::query_list("ids")],
    );

    const FOLLOW_PLAYLIST: OperationDescriptor = OperationDescriptor::new(
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

    fn build(op: &OperationDescriptor, args: Args) -> Result<Request, SpotifyError> {
        RequestBuilder::new(BASE).build(op, &args)
    }

    #[test]
    fn test_absent_query_param_is_omitted() {
        let request = build(&GET_ALBUM, Args::new().with("id", "2BTZIqw0ntH9MvilQ3ewNY")).unwrap();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url(), "https://api.spotify.com/v1/albums/2BTZIqw0ntH9MvilQ3ewNY");
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_present_query_param_is_appended() {
        let args = Args::new().with("id", "2BTZIqw0ntH9MvilQ3ewNY").with("market", "BR");
        let request = build(&GET_ALBUM, args).unwrap();
        assert_eq!(
            request.url(),
            "https://api.spotify.com/v1/albums/2BTZIqw0ntH9MvilQ3ewNY?market=BR"
        );
    }

    #[test]
    fn test_list_param_is_joined_then_encoded() {
        let args = Args::new().with("ids", ["41MnTivkwTO3UUJ8DrqEJJ", "2BTZIqw0ntH9MvilQ3ewNY"]);
        let request = build(&GET_SEVERAL_ALBUMS, args).unwrap();
        assert_eq!(
            request.url(),
            "https://api.spotify.com/v1/albums/?ids=41MnTivkwTO3UUJ8DrqEJJ%2C2BTZIqw0ntH9MvilQ3ewNY"
        );
    }

    #[test]
    fn test_query_follows_declaration_order_not_insertion_order() {
        let args = Args::new().with("market", "BR").with("ids", ["a", "b"]);
        let request = build(&GET_SEVERAL_ALBUMS, args).unwrap();
        assert!(request.url().ends_with("/v1/albums/?ids=a%2Cb&market=BR"));
    }

    #[test]
    fn test_fixed_query_is_extended_with_ampersand() {
        let request = build(&FOLLOW_ARTISTS, Args::new().with("ids", ["x", "y"])).unwrap();
        assert_eq!(
            request.url(),
            "https://api.spotify.com/v1/me/following?type=artist&ids=x%2Cy"
        );
    }

    #[test]
    fn test_empty_list_fails_before_io() {
        let err = build(&GET_SEVERAL_ALBUMS, Args::new().with("ids", Vec::<String>::new()))
            .unwrap_err();
        assert!(matches!(err, SpotifyError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_path_argument_is_invalid() {
        let err = build(&GET_ALBUM, Args::new().with("market", "BR")).unwrap_err();
        assert!(err.to_string().contains("missing required argument `id`"), "{err}");
    }

    #[test]
    fn test_unknown_argument_is_invalid() {
        let err = build(&GET_ALBUM, Args::new().with("id", "a").with("country", "BR")).unwrap_err();
        assert!(err.to_string().contains("no parameter `country`"), "{err}");
    }

    #[test]
    fn test_path_values_are_percent_encoded() {
        let request = build(&GET_ALBUM, Args::new().with("id", "a/b c")).unwrap();
        assert_eq!(request.url(), "https://api.spotify.com/v1/albums/a%2Fb%20c");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let args = Args::new().with("id", "a").with("market", "from_token&x=1");
        let request = build(&GET_ALBUM, args).unwrap();
        assert!(request.url().ends_with("?market=from_token%26x%3D1"));
    }

    #[test]
    fn test_body_is_literal_substitution() {
        let args = Args::new()
            .with("owner_id", "jmperezperez")
            .with("playlist_id", "2v3iNvBX8Ay1Gt2uXtUKUT")
            .with("public", true);
        let request = build(&FOLLOW_PLAYLIST, args).unwrap();
        assert_eq!(request.method(), Method::Put);
        assert_eq!(
            request.url(),
            "https://api.spotify.com/v1/users/jmperezperez/playlists/2v3iNvBX8Ay1Gt2uXtUKUT/followers"
        );
        assert_eq!(request.body(), Some(br#"{"public": true}"#.as_slice()));
        assert_eq!(request.header_values("Content-Type"), vec!["application/json"]);
    }

    #[test]
    fn test_body_false() {
        let args = Args::new()
            .with("owner_id", "o")
            .with("playlist_id", "p")
            .with("public", false);
        let request = build(&FOLLOW_PLAYLIST, args).unwrap();
        assert_eq!(request.body(), Some(br#"{"public": false}"#.as_slice()));
    }

    #[test]
    fn test_missing_body_argument_is_invalid() {
        let args = Args::new().with("owner_id", "o").with("playlist_id", "p");
        assert!(matches!(
            build(&FOLLOW_PLAYLIST, args),
            Err(SpotifyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_header_slot() {
        const WITH_HEADER: OperationDescriptor = OperationDescriptor::new(
            "with_header",
            Method::Get,
            "/v1/me",
            &[ParamSlot::header("Accept-Language")],
        );
        let request = build(&WITH_HEADER, Args::new().with("Accept-Language", "pt-BR")).unwrap();
        assert_eq!(request.header_values("accept-language"), vec!["pt-BR"]);
        assert_eq!(request.url(), "https://api.spotify.com/v1/me");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let request = RequestBuilder::new("http://127.0.0.1:9000/")
            .build(&GET_ALBUM, &Args::new().with("id", "x"))
            .unwrap();
        assert_eq!(request.url(), "http://127.0.0.1:9000/v1/albums/x");
    }
}
