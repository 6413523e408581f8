use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::extractor::{Extractor, ExtractorError, VideoInfo};

/// Prefer a combined mp4, then whatever the platform calls best
const FORMAT_PREF: &str = "best[ext=mp4]/best";

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Could not extract stream URL from video")]
    NoPlayableUrl,

    #[error(transparent)]
    Extractor(#[from] ExtractorError),
}

/// A direct playable URL plus the display attributes of the chosen format.
/// The URL is ephemeral and platform-issued; it is never cached.
#[derive(Debug, Serialize)]
pub struct StreamData {
    pub stream_url: String,
    pub duration: f64,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub ext: String,
}

pub fn fetch(extractor: &Extractor, video_id: &str) -> Result<StreamData, StreamError> {
    let info = extractor.extract_info(video_id, Some(FORMAT_PREF))?;

    let stream_url = match resolve_stream_url(&info) {
        Some(url) => url.to_string(),
        None => {
            let n = info.formats.as_deref().map(|f| f.len()).unwrap_or(0);
            if n == 0 {
                debug!("Extractor returned no formats for {video_id}");
            } else {
                debug!("None of {n} formats matched the codec filters for {video_id}");
            }
            return Err(StreamError::NoPlayableUrl);
        }
    };

    Ok(StreamData {
        stream_url,
        duration: info.duration.unwrap_or(0.0),
        width: info.width.unwrap_or(0),
        height: info.height.unwrap_or(0),
        format: info.format.unwrap_or_default(),
        ext: info.ext.unwrap_or_else(|| "mp4".to_string()),
    })
}

/// Resolution order: the already-selected top-level URL, then the first
/// combined audio+video format, then the first video-only format. The
/// format list is ordered worst-to-best, so scans run in reverse.
fn resolve_stream_url(info: &VideoInfo) -> Option<&str> {
    if let Some(url) = info.url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url);
    }

    let formats = info.formats.as_deref().unwrap_or(&[]);

    let combined = formats
        .iter()
        .rev()
        .find(|f| f.has_video() && f.has_audio())
        .and_then(|f| f.url.as_deref())
        .filter(|u| !u.is_empty());
    if combined.is_some() {
        return combined;
    }

    formats
        .iter()
        .rev()
        .find(|f| f.has_video())
        .and_then(|f| f.url.as_deref())
        .filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn info(value: serde_json::Value) -> VideoInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_top_level_url_wins() {
        let i = info(json!({
            "url": "https://example.com/best",
            "formats": [
                {"url": "https://example.com/other", "vcodec": "avc1", "acodec": "mp4a"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), Some("https://example.com/best"));
    }

    #[test]
    fn test_combined_preferred_over_video_only() {
        // worst-to-best ordering: the video-only entry is "better" but the
        // combined one must still win
        let i = info(json!({
            "formats": [
                {"url": "https://example.com/combined", "vcodec": "avc1", "acodec": "mp4a"},
                {"url": "https://example.com/video-only", "vcodec": "vp9", "acodec": "none"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), Some("https://example.com/combined"));
    }

    #[test]
    fn test_highest_quality_combined_selected() {
        let i = info(json!({
            "formats": [
                {"url": "https://example.com/low", "vcodec": "avc1", "acodec": "mp4a"},
                {"url": "https://example.com/high", "vcodec": "avc1", "acodec": "mp4a"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), Some("https://example.com/high"));
    }

    #[test]
    fn test_video_only_fallback() {
        let i = info(json!({
            "formats": [
                {"url": "https://example.com/audio", "vcodec": "none", "acodec": "mp4a"},
                {"url": "https://example.com/video", "vcodec": "vp9", "acodec": "none"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), Some("https://example.com/video"));
    }

    #[test]
    fn test_audio_only_yields_nothing() {
        let i = info(json!({
            "formats": [
                {"url": "https://example.com/audio", "vcodec": "none", "acodec": "opus"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), None);
    }

    #[test]
    fn test_no_url_and_no_formats() {
        assert_eq!(resolve_stream_url(&info(json!({}))), None);
        assert_eq!(resolve_stream_url(&info(json!({"formats": []}))), None);
    }

    #[test]
    fn test_empty_top_level_url_falls_through() {
        let i = info(json!({
            "url": "",
            "formats": [
                {"url": "https://example.com/v", "vcodec": "avc1", "acodec": "mp4a"}
            ]
        }));
        assert_eq!(resolve_stream_url(&i), Some("https://example.com/v"));
    }

    #[test]
    fn test_no_playable_url_message() {
        assert_eq!(
            StreamError::NoPlayableUrl.to_string(),
            "Could not extract stream URL from video"
        );
    }
}
