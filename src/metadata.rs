use serde::Serialize;

use crate::extractor::{Extractor, ExtractorError, VideoInfo};

/// Metadata record for a video, every field defaulted when the extractor
/// leaves it out
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub title: String,
    pub channel: String,
    pub duration: f64,
    pub description: String,
    pub thumbnail: String,
    pub upload_date: String,
    pub view_count: u64,
}

pub fn fetch(extractor: &Extractor, video_id: &str) -> Result<Metadata, ExtractorError> {
    let info = extractor.extract_info(video_id, None)?;
    Ok(shape(info))
}

fn shape(info: VideoInfo) -> Metadata {
    Metadata {
        title: info.title.unwrap_or_default(),
        // uploader is the display name; fall back to the channel field
        channel: info
            .uploader
            .filter(|s| !s.is_empty())
            .or(info.channel)
            .unwrap_or_default(),
        duration: info.duration.unwrap_or(0.0),
        description: info.description.unwrap_or_default(),
        thumbnail: info.thumbnail.unwrap_or_default(),
        upload_date: info.upload_date.unwrap_or_default(),
        view_count: info.view_count.unwrap_or(0),
    }
}
