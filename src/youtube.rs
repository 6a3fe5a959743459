use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Items requested per playlist page (the API maximum).
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: String,
}

/// One page of a channel's uploads playlist.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemDetails {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoDetails>,
}

/// Statistics, snippet, and content details for a single video.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
    #[serde(default)]
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    // The API reports view counts as decimal strings.
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

impl VideoDetails {
    /// Reported view count, or 0 when statistics are hidden or absent
    /// (private, members-only, unavailable).
    pub fn views(&self) -> u64 {
        self.statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// ISO-8601 duration string, defaulting to zero-length.
    pub fn duration(&self) -> &str {
        self.content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref())
            .unwrap_or("PT0S")
    }
}

/// YouTube Data API v3 client
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, YOUTUBE_API_BASE)
    }

    /// Create a client with a custom base URL (for tests against a mock server).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for channels matching a term, returning candidate channel IDs
    /// in relevance order.
    pub async fn search_channels(&self, term: &str) -> Result<Vec<String>> {
        let body = self
            .request_json(
                "search",
                &[("part", "snippet"), ("type", "channel"), ("q", term)],
            )
            .await?;
        let response: SearchResponse = serde_json::from_value(body)?;
        Ok(response
            .items
            .into_iter()
            .map(|item| item.snippet.channel_id)
            .collect())
    }

    /// Fetch one page of a playlist, continuing from `page_token` if present.
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let max_results = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let body = self.request_json("playlistItems", &params).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Batch-fetch statistics, snippet, and content details for a set of
    /// video IDs in a single call.
    pub async fn get_video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>> {
        let ids = video_ids.join(",");
        let body = self
            .request_json(
                "videos",
                &[
                    ("part", "statistics,snippet,contentDetails"),
                    ("id", ids.as_str()),
                ],
            )
            .await?;
        let response: VideoListResponse = serde_json::from_value(body)?;
        Ok(response.items)
    }

    /// Send a GET request and parse the body as JSON, surfacing the API's
    /// in-band error payload before any typed deserialization. The API
    /// reports failures as `{"error": {"message": ...}}`, so the payload
    /// takes precedence over the HTTP status.
    async fn request_json(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let body: serde_json::Value = response.json().await?;
        check_api_error(&body)?;
        Ok(body)
    }
}

fn check_api_error(body: &serde_json::Value) -> Result<()> {
    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(Error::Upstream(message));
    }
    Ok(())
}
