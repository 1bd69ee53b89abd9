//! YouTube client tests against a stub API.

use serde_json::json;
use vidrate_models::extract_video_ref;
use vidrate_youtube::{YoutubeClient, YoutubeConfig, YoutubeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> YoutubeClient {
    let config = YoutubeConfig::default()
        .with_base_url(server.uri())
        .with_api_key("test-key");
    YoutubeClient::new(config).unwrap()
}

fn video_list(duration: &str) -> serde_json::Value {
    json!({
        "items": [{
            "snippet": {
                "title": "Rick Astley - Never Gonna Give You Up",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                    "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg" }
                }
            },
            "contentDetails": { "duration": duration }
        }]
    })
}

#[tokio::test]
async fn test_fetch_video_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "dQw4w9WgXcQ"))
        .and(query_param("part", "snippet,contentDetails"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_list("PT3M33S")))
        .expect(1)
        .mount(&server)
        .await;

    let video = extract_video_ref("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
    let details = client_for(&server).fetch_video(&video).await.unwrap();

    assert_eq!(details.title, "Rick Astley - Never Gonna Give You Up");
    // No "high" variant, so medium is the best available
    assert_eq!(
        details.thumbnail.as_deref(),
        Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
    );
    assert_eq!(details.duration, "PT3M33S");
}

#[tokio::test]
async fn test_fetch_video_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let video = extract_video_ref("https://youtu.be/missing").unwrap();
    let err = client_for(&server).fetch_video(&video).await.unwrap_err();

    assert!(matches!(err, YoutubeError::NotFound(ref id) if id == "missing"));
}

#[tokio::test]
async fn test_fetch_video_structured_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota."
            }
        })))
        .mount(&server)
        .await;

    let video = extract_video_ref("https://youtu.be/abc").unwrap();
    let err = client_for(&server).fetch_video(&video).await.unwrap_err();

    match err {
        YoutubeError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(
                message,
                "The request cannot be completed because you have exceeded your quota."
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_video_unstructured_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let video = extract_video_ref("https://youtu.be/abc").unwrap();
    let err = client_for(&server).fetch_video(&video).await.unwrap_err();

    assert!(matches!(
        err,
        YoutubeError::Api { status: 502, ref message } if message == "YouTube API error"
    ));
}

#[tokio::test]
async fn test_fetch_video_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let video = extract_video_ref("https://youtu.be/abc").unwrap();
    let err = client_for(&server).fetch_video(&video).await.unwrap_err();

    assert!(matches!(err, YoutubeError::Json(_)));
}

#[tokio::test]
async fn test_fetch_video_network_error() {
    // Nothing listens on the reserved discard port
    let config = YoutubeConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .with_api_key("test-key");
    let client = YoutubeClient::new(config).unwrap();

    let video = extract_video_ref("https://youtu.be/abc").unwrap();
    let err = client.fetch_video(&video).await.unwrap_err();

    assert!(matches!(err, YoutubeError::Network(_)));
}
