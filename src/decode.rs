//! Response decoding: success bodies into target shapes, error bodies into
//! [`SpotifyError`].

use crate::errors::{SpotifyError, TransportError};
use crate::http::Response;
use crate::http::error_helpers::format_decode_error;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Strategy for turning response bytes into a target type.
///
/// Fixed when the client is built; see [`ClientBuilder::decoder`](crate::ClientBuilder::decoder).
pub trait Decoder: Send + Sync {
    /// Decodes `response.body` as `T`.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::MalformedResponse`] when the body doesn't match `T`.
    fn decode<T: DeserializeOwned>(&self, response: &Response) -> Result<T, SpotifyError>;
}

/// serde_json decoder.
///
/// Wire fields are snake_case, which is also how the model fields are
/// named, so no renaming is configured. Unknown fields are ignored. An
/// empty body (e.g. `204 No Content`) is read as `null`, which void targets
/// accept and entity targets reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, response: &Response) -> Result<T, SpotifyError> {
        let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &response.body
        };
        serde_json::from_slice(body).map_err(|e| {
            SpotifyError::MalformedResponse(format_decode_error(
                body,
                std::any::type_name::<T>(),
                &e,
            ))
        })
    }
}

/// The error shapes the API puts in non-2xx bodies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    /// `{"error": {"status": 404, "message": "..."}}`
    Nested { error: ErrorObject },
    /// `{"message": "..."}`
    Flat { message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: String,
}

impl ErrorPayload {
    fn into_message(self) -> String {
        match self {
            Self::Nested { error } => error.message,
            Self::Flat { message } => message,
        }
    }
}

/// Reason used when a status code has no reason phrase.
const UNKNOWN_REASON: &str = "Unknown Status";

/// Maps a non-2xx response to an error.
///
/// A body the decoder reads as an error payload gives [`SpotifyError::Api`]
/// with its message; anything else (empty, HTML, unrelated JSON) falls back
/// to [`TransportError::Status`] with the status and reason phrase, or
/// `"Unknown Status"` when the status has none.
pub fn decode_error<D: Decoder>(decoder: &D, response: &Response) -> SpotifyError {
    match decoder.decode::<ErrorPayload>(response) {
        Ok(payload) => SpotifyError::Api {
            status_code: response.status,
            message: payload.into_message(),
        },
        Err(_) => SpotifyError::Transport(TransportError::Status {
            status_code: response.status,
            reason: if response.reason.trim().is_empty() {
                UNKNOWN_REASON.to_string()
            } else {
                response.reason.clone()
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        release_date: Option<String>,
        total_tracks: u32,
        genres: Vec<String>,
    }

    #[test]
    fn test_decode_maps_snake_case_fields() {
        let response = Response::new(200, r#"{"release_date": "1981-12", "total_tracks": 11}"#);
        let sample: Sample = JsonDecoder.decode(&response).unwrap();
        assert_eq!(sample.release_date.as_deref(), Some("1981-12"));
        assert_eq!(sample.total_tracks, 11);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let response = Response::new(200, r#"{"total_tracks": 3, "extra_future_field": {"a": 1}}"#);
        let sample: Sample = JsonDecoder.decode(&response).unwrap();
        assert_eq!(sample.total_tracks, 3);
    }

    #[test]
    fn test_decode_missing_fields_default() {
        let response = Response::new(200, "{}");
        let sample: Sample = JsonDecoder.decode(&response).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_no_content_decodes_to_no_value() {
        let response = Response::new(204, "");
        let _: IgnoredAny = JsonDecoder.decode(&response).unwrap();
        let (): () = JsonDecoder.decode(&response).unwrap();
        let nothing: Option<Sample> = JsonDecoder.decode(&response).unwrap();
        assert!(nothing.is_none());
    }

    #[test]
    fn test_no_content_for_entity_is_malformed() {
        let response = Response::new(204, "");
        let err = JsonDecoder.decode::<Vec<bool>>(&response).unwrap_err();
        assert!(matches!(err, SpotifyError::MalformedResponse(_)));
    }

    #[test]
    fn test_bool_array_is_positional() {
        let response = Response::new(200, "[false, true, true]");
        let flags: Vec<bool> = JsonDecoder.decode(&response).unwrap();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn test_malformed_body_mentions_target() {
        let response = Response::new(200, "<html>");
        let err = JsonDecoder.decode::<Sample>(&response).unwrap_err();
        assert!(err.to_string().contains("Sample"), "{err}");
        assert!(err.to_string().contains("<html>"), "{err}");
    }

    #[test]
    fn test_decode_error_flat_message() {
        let response = Response::new(404, r#"{"message":"not found"}"#);
        match decode_error(&JsonDecoder, &response) {
            SpotifyError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_nested_message() {
        let response = Response::new(
            401,
            r#"{"error": {"status": 401, "message": "The access token expired"}}"#,
        );
        let err = decode_error(&JsonDecoder, &response);
        assert!(matches!(
            err,
            SpotifyError::Api { status_code: 401, ref message } if message == "The access token expired"
        ));
    }

    #[test]
    fn test_decode_error_unparseable_falls_back() {
        let response = Response::new(500, "upstream exploded");
        match decode_error(&JsonDecoder, &response) {
            SpotifyError::Transport(TransportError::Status {
                status_code,
                reason,
            }) => {
                assert_eq!(status_code, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_empty_body_falls_back() {
        let response = Response::new(503, "");
        assert!(matches!(
            decode_error(&JsonDecoder, &response),
            SpotifyError::Transport(TransportError::Status { status_code: 503, .. })
        ));
    }

    #[test]
    fn test_decode_error_status_without_reason() {
        let response = Response::new(599, "");
        let err = decode_error(&JsonDecoder, &response);
        assert!(matches!(
            &err,
            SpotifyError::Transport(TransportError::Status { status_code: 599, reason })
                if reason == "Unknown Status"
        ));
        assert_eq!(err.to_string(), "HTTP 599 Unknown Status");
    }

    #[test]
    fn test_decode_error_json_without_message_falls_back() {
        let response = Response::new(400, r#"{"error": "invalid_client"}"#);
        assert!(matches!(
            decode_error(&JsonDecoder, &response),
            SpotifyError::Transport(TransportError::Status { status_code: 400, .. })
        ));
    }
}
