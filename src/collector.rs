use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::format::{format_duration, parse_iso_duration, time_ago};
use crate::views::format_views;
use crate::youtube::YouTubeClient;

/// Safety valve against runaway feeds: no collection run fetches more than
/// this many playlist pages, however large the target sample is.
pub const MAX_PAGE_FETCHES: usize = 20;

/// A video admitted into the sample: older than the cutoff, with a public
/// nonzero view count.
#[derive(Debug, Clone, Serialize)]
pub struct CollectedVideo {
    pub video_id: String,
    pub title: String,
    pub link: String,
    pub views: u64,
    pub published_at: DateTime<Utc>,
    pub duration_seconds: u64,
}

/// Walk a playlist page by page, accumulating up to `target_count` videos
/// published before `cutoff` with nonzero view counts.
///
/// Pages are fetched strictly in sequence (each page's results decide
/// whether the next is needed). The run stops when the sample is full, the
/// feed is exhausted, or [`MAX_PAGE_FETCHES`] pages have been fetched; a
/// short sample is not an error. Any upstream failure aborts the whole run.
pub async fn collect_videos(
    client: &YouTubeClient,
    playlist_id: &str,
    cutoff: DateTime<Utc>,
    target_count: usize,
) -> Result<Vec<CollectedVideo>> {
    collect_videos_bounded(client, playlist_id, cutoff, target_count, MAX_PAGE_FETCHES).await
}

/// [`collect_videos`] with an explicit page-fetch bound.
pub async fn collect_videos_bounded(
    client: &YouTubeClient,
    playlist_id: &str,
    cutoff: DateTime<Utc>,
    target_count: usize,
    max_pages: usize,
) -> Result<Vec<CollectedVideo>> {
    let mut sample: Vec<CollectedVideo> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut iterations = 0;

    while sample.len() < target_count && iterations < max_pages {
        iterations += 1;

        let page = client
            .list_playlist_items(playlist_id, page_token.as_deref())
            .await?;
        if page.items.is_empty() {
            break;
        }

        let video_ids: Vec<String> = page
            .items
            .iter()
            .map(|item| item.content_details.video_id.clone())
            .collect();
        let details = client.get_video_details(&video_ids).await?;

        for video in details {
            let published_at = video.snippet.published_at;
            let views = video.views();
            let duration_seconds = parse_iso_duration(video.duration());

            // Too recent: views haven't settled yet
            if published_at >= cutoff {
                continue;
            }

            // No public view count: private, members-only, unavailable
            if views == 0 {
                continue;
            }

            if sample.len() < target_count {
                sample.push(CollectedVideo {
                    link: format!("https://www.youtube.com/watch?v={}", video.id),
                    video_id: video.id,
                    title: video.snippet.title,
                    views,
                    published_at,
                    duration_seconds,
                });
            }
        }

        page_token = page.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    Ok(sample)
}

/// Arithmetic mean of the sample's view counts, rounded to the nearest
/// integer. An empty sample averages to 0.
pub fn average_views(sample: &[CollectedVideo]) -> u64 {
    if sample.is_empty() {
        return 0;
    }
    let total: u64 = sample.iter().map(|v| v.views).sum();
    (total as f64 / sample.len() as f64).round() as u64
}

#[derive(Debug, Serialize)]
pub struct ReportVideo {
    pub title: String,
    pub link: String,
    pub views: u64,
    pub views_formatted: String,
    pub published_at: DateTime<Utc>,
    pub time_ago: String,
    pub duration: String,
}

/// The "compute channel average views" response.
#[derive(Debug, Serialize)]
pub struct ChannelReport {
    pub channel_id: String,
    pub total_included: usize,
    pub average_views: u64,
    pub average_views_formatted: String,
    pub videos: Vec<ReportVideo>,
}

pub fn build_report(channel_id: &str, sample: Vec<CollectedVideo>) -> ChannelReport {
    let average = average_views(&sample);
    let videos: Vec<ReportVideo> = sample
        .into_iter()
        .map(|v| ReportVideo {
            views_formatted: format!("{} views", format_views(v.views)),
            time_ago: time_ago(v.published_at),
            duration: format_duration(v.duration_seconds),
            title: v.title,
            link: v.link,
            views: v.views,
            published_at: v.published_at,
        })
        .collect();

    ChannelReport {
        channel_id: channel_id.to_string(),
        total_included: videos.len(),
        average_views: average,
        average_views_formatted: format!("{} views", format_views(average)),
        videos,
    }
}
