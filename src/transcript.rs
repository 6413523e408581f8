use serde::Serialize;

use crate::captions::{self, CaptionError};
use crate::{Segment, TranscriptKind};

/// One output segment; end is derived from start + duration
#[derive(Debug, Serialize)]
pub struct TimedSegment {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptData {
    pub full_text: String,
    pub segments: Vec<TimedSegment>,
    #[serde(rename = "type")]
    pub kind: TranscriptKind,
    pub language: String,
}

pub async fn fetch(client: &reqwest::Client, video_id: &str, lang: &str) -> Result<TranscriptData, CaptionError> {
    let transcripts = captions::list_transcripts(client, video_id).await?;
    let selected = transcripts.select(lang)?;
    let kind = selected.kind;
    let language = selected.track.language_code.clone();
    let raw = captions::fetch_track(client, selected.track).await?;
    Ok(assemble(raw, kind, language))
}

fn assemble(raw: Vec<Segment>, kind: TranscriptKind, language: String) -> TranscriptData {
    let full_text = raw.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ");

    let segments = raw
        .into_iter()
        .map(|s| TimedSegment {
            start: s.start,
            end: s.start + s.duration,
            duration: s.duration,
            text: s.text,
        })
        .collect();

    TranscriptData {
        full_text,
        segments,
        kind,
        language,
    }
}
