use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::youtube::YouTubeClient;

/// Which of a channel's content streams to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VideoType {
    /// Regular long-form uploads
    Long,
    /// Shorts
    Shorts,
}

fn channel_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/channel/([^/?]+)").unwrap())
}

fn search_term_regexes() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            // https://www.youtube.com/@username
            Regex::new(r"/@([^/?]+)").unwrap(),
            // https://www.youtube.com/c/ChannelName
            Regex::new(r"/c/([^/?]+)").unwrap(),
            // https://www.youtube.com/user/Username
            Regex::new(r"/user/([^/?]+)").unwrap(),
        ]
    })
}

/// Extract a channel ID from a `/channel/UCxxxx` URL, if present.
pub fn extract_channel_id(reference: &str) -> Option<String> {
    channel_id_regex()
        .captures(reference)
        .map(|caps| caps[1].to_string())
}

/// Extract a search term from a handle, custom-name, or legacy-username URL.
pub fn extract_search_term(reference: &str) -> Option<String> {
    search_term_regexes()
        .iter()
        .find_map(|re| re.captures(reference).map(|caps| caps[1].to_string()))
}

/// Resolve a channel URL or handle to a canonical channel ID.
///
/// A `/channel/<id>` reference resolves directly with no network call; the
/// other recognized shapes fall back to a channel search, taking the first
/// result. References matching no shape fail before any request is sent.
pub async fn resolve_channel_id(client: &YouTubeClient, reference: &str) -> Result<String> {
    if let Some(id) = extract_channel_id(reference) {
        return Ok(id);
    }

    let term = extract_search_term(reference)
        .ok_or_else(|| Error::MalformedReference(reference.to_string()))?;

    let candidates = client.search_channels(&term).await?;
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChannelNotFound(term))
}

/// Derive the uploads playlist ID for a channel's content stream.
///
/// Channel IDs carry a `UC` prefix; the uploads playlists reuse the rest of
/// the ID under a stream-specific prefix: `UULF` for long-form, `UUSH` for
/// shorts.
pub fn uploads_feed_id(channel_id: &str, video_type: VideoType) -> String {
    let base = channel_id.strip_prefix("UC").unwrap_or(channel_id);
    match video_type {
        VideoType::Long => format!("UULF{base}"),
        VideoType::Shorts => format!("UUSH{base}"),
    }
}
