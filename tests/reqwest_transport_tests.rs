//! The reqwest-backed transport against a local mock server.

mod common;

use common::*;
use spotify_rs::{
    Headers, Method, NetworkError, Request, ReqwestTransport, SpotifyClient, SpotifyError,
    Transport, TransportError,
};
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SpotifyClient {
    SpotifyClient::builder(ACCESS_TOKEN)
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/0sNOF9WDwhWunNAHPD3Baj"))
        .and(query_param("market", "BR"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("album.json")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let album = client
        .albums()
        .get_album("0sNOF9WDwhWunNAHPD3Baj", Some("BR"))
        .await
        .unwrap();

    assert_eq!(album.name, "She's So Unusual");
}

#[tokio::test]
async fn test_comma_list_reaches_server_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me/following/contains"))
        .and(query_param("type", "user"))
        .and(query_param("ids", "possan,elogain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[false, true]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let following = client
        .follow()
        .is_following(spotify_rs::FollowType::User, &["possan", "elogain"])
        .await
        .unwrap();

    assert_eq!(following, vec![false, true]);
}

#[tokio::test]
async fn test_put_with_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/users/jmperezperez/playlists/2v3iNvBX8Ay1Gt2uXtUKUT/followers"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"public": true}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .follow()
        .follow_playlist("jmperezperez", "2v3iNvBX8Ay1Gt2uXtUKUT", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_with_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/me/tracks"))
        .and(query_param("ids", "4iV5W9uYEdYUVa79Axb7Rh"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .library()
        .remove_saved_tracks(&["4iV5W9uYEdYUVa79Axb7Rh"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/ghost"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"error": {"status": 404, "message": "No such user"}}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.profiles().get_user("ghost").await.unwrap_err();
    assert!(
        matches!(err, SpotifyError::Api { status_code: 404, ref message } if message == "No such user"),
        "{err:?}"
    );

    let err = client.profiles().me().await.unwrap_err();
    assert!(
        matches!(
            err,
            SpotifyError::Transport(TransportError::Status { status_code: 503, ref reason })
                if reason == "Service Unavailable"
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = SpotifyClient::builder(ACCESS_TOKEN)
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.profiles().me().await.unwrap_err();
    assert!(
        matches!(
            err,
            SpotifyError::Transport(TransportError::Network(NetworkError::Timeout(_)))
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop a server so the port is very likely closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = SpotifyClient::builder(ACCESS_TOKEN)
        .base_url(uri)
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.profiles().me().await.unwrap_err();
    assert!(
        matches!(err, SpotifyError::Transport(TransportError::Network(_))),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_transport_returns_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "4")
                .set_body_string("slow down"),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::default();
    let request = Request::new(
        Method::Get,
        format!("{}/raw", server.uri()),
        Headers::new(),
        None,
    );
    let response = transport.execute(request).await.unwrap();

    assert_eq!(response.status, 429);
    assert_eq!(response.reason, "Too Many Requests");
    assert_eq!(response.header_values("retry-after"), vec!["4"]);
    assert_eq!(response.body.as_ref(), b"slow down");
}
