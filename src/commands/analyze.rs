use chrono::{Months, Utc};

use crate::channel::{VideoType, resolve_channel_id, uploads_feed_id};
use crate::collector::{ChannelReport, build_report, collect_videos};
use crate::config::youtube_api_key;
use crate::error::{Error, Result};
use crate::youtube::YouTubeClient;

pub async fn run(
    channel: &str,
    skip_months: u32,
    count: usize,
    video_type: VideoType,
    json: bool,
) -> Result<()> {
    let api_key = youtube_api_key().ok_or(Error::ApiKeyMissing)?;
    let client = YouTubeClient::new(&api_key)?;

    eprintln!("Resolving channel...");
    let channel_id = resolve_channel_id(&client, channel).await?;

    let playlist_id = uploads_feed_id(&channel_id, video_type);
    let cutoff = Utc::now()
        .checked_sub_months(Months::new(skip_months))
        .ok_or_else(|| Error::Validation("Skip window is too large.".to_string()))?;

    eprintln!(
        "Collecting up to {} video(s) older than {} month(s)...",
        count, skip_months
    );
    let sample = collect_videos(&client, &playlist_id, cutoff, count).await?;
    let report = build_report(&channel_id, sample);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &ChannelReport) {
    println!("Channel: {}", report.channel_id);
    println!("Videos included: {}", report.total_included);
    println!(
        "Average views: {} ({})\n",
        report.average_views, report.average_views_formatted
    );

    if report.videos.is_empty() {
        println!("No videos matched the recency window.");
        return;
    }

    for (i, video) in report.videos.iter().enumerate() {
        println!("{}. {} ({})", i + 1, video.title, video.duration);
        println!("   {} | {}", video.views_formatted, video.time_ago);
        println!("   {}", video.link);
        println!();
    }
}
