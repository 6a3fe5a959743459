//! Integration tests for the paginated video collector using wiremock mocks.

use chrono::{DateTime, TimeZone, Utc};
use roas_cli::collector::{MAX_PAGE_FETCHES, collect_videos, collect_videos_bounded};
use roas_cli::error::Error;
use roas_cli::youtube::YouTubeClient;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YouTubeClient {
    YouTubeClient::with_base_url("test-key", base_url).expect("client construction should not fail")
}

fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn playlist_page(video_ids: &[&str], next_token: Option<&str>) -> serde_json::Value {
    let items: Vec<serde_json::Value> = video_ids
        .iter()
        .map(|id| serde_json::json!({ "contentDetails": { "videoId": id } }))
        .collect();
    let mut body = serde_json::json!({ "items": items });
    if let Some(token) = next_token {
        body["nextPageToken"] = serde_json::json!(token);
    }
    body
}

fn video(id: &str, views: Option<u64>, published_at: &str) -> serde_json::Value {
    let mut body = serde_json::json!({
        "id": id,
        "snippet": { "title": format!("video {id}"), "publishedAt": published_at },
        "contentDetails": { "duration": "PT10M1S" }
    });
    if let Some(views) = views {
        body["statistics"] = serde_json::json!({ "viewCount": views.to_string() });
    }
    body
}

#[tokio::test]
async fn collects_across_pages_until_target_reached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "UULFabc"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b"], Some("page2"))),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["c", "d"], None)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                video("a", Some(1000), "2024-06-01T00:00:00Z"),
                video("b", Some(2000), "2024-05-01T00:00:00Z"),
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "c,d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                video("c", Some(3000), "2024-04-01T00:00:00Z"),
                video("d", Some(4000), "2024-03-01T00:00:00Z"),
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos(&client, "UULFabc", cutoff(), 3)
        .await
        .expect("collection should succeed");

    // Never more than the target, in discovery order
    assert_eq!(sample.len(), 3);
    assert_eq!(sample[0].video_id, "a");
    assert_eq!(sample[1].video_id, "b");
    assert_eq!(sample[2].video_id, "c");
    assert_eq!(sample[0].views, 1000);
    assert_eq!(sample[0].link, "https://www.youtube.com/watch?v=a");
    assert_eq!(sample[0].duration_seconds, 601);
}

#[tokio::test]
async fn skips_recent_and_hidden_videos() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(playlist_page(&["new", "hidden", "zero", "ok"], None)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                // Published on the cutoff itself: still too recent
                video("new", Some(500), "2025-01-01T00:00:00Z"),
                // No statistics at all
                video("hidden", None, "2024-06-01T00:00:00Z"),
                video("zero", Some(0), "2024-06-01T00:00:00Z"),
                video("ok", Some(750), "2024-06-01T00:00:00Z"),
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos(&client, "UULFabc", cutoff(), 10)
        .await
        .expect("collection should succeed");

    assert_eq!(sample.len(), 1);
    assert_eq!(sample[0].video_id, "ok");
    assert!(sample.iter().all(|v| v.views > 0));
    assert!(sample.iter().all(|v| v.published_at < cutoff()));
}

#[tokio::test]
async fn stops_when_feed_is_exhausted() {
    let server = MockServer::start().await;

    // Single page, no continuation token
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["a"], None)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ video("a", Some(1000), "2024-06-01T00:00:00Z") ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos(&client, "UULFabc", cutoff(), 24)
        .await
        .expect("collection should succeed");

    // Short sample is not an error
    assert_eq!(sample.len(), 1);
}

#[tokio::test]
async fn stops_on_an_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&[], Some("more"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos(&client, "UULFabc", cutoff(), 24)
        .await
        .expect("collection should succeed");

    assert!(sample.is_empty());
}

#[tokio::test]
async fn honors_the_page_fetch_bound() {
    let server = MockServer::start().await;

    // Every page is all-recent and promises another page; only the bound
    // stops the loop.
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["x"], Some("again"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "again"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["x"], Some("again"))),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ video("x", Some(1000), "2025-06-01T00:00:00Z") ]
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos_bounded(&client, "UULFabc", cutoff(), 24, 3)
        .await
        .expect("collection should succeed");

    assert!(sample.is_empty());
    server.verify().await;
}

#[test]
fn default_page_fetch_bound_is_twenty() {
    assert_eq!(MAX_PAGE_FETCHES, 20);
}

#[tokio::test]
async fn target_of_zero_performs_no_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["a"], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sample = collect_videos(&client, "UULFabc", cutoff(), 0)
        .await
        .expect("collection should succeed");

    assert!(sample.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn upstream_error_aborts_the_whole_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b"], Some("page2"))),
        )
        .mount(&server)
        .await;

    // The statistics batch fails: no partial sample comes back
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = collect_videos(&client, "UULFabc", cutoff(), 24)
        .await
        .unwrap_err();

    match err {
        Error::Upstream(msg) => assert!(msg.contains("quotaExceeded")),
        other => panic!("expected upstream error, got: {other}"),
    }
}
