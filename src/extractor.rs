use std::process::Command;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::watch_url;

/// Errors at the yt-dlp boundary, distinguished by kind before being
/// flattened into the output envelope
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("yt-dlp not found. Install it:\n  pip install yt-dlp\n  or: brew install yt-dlp")]
    ToolNotFound,

    #[error("yt-dlp failed: {0}")]
    Failed(String),

    #[error("failed to parse yt-dlp JSON output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to run yt-dlp: {0}")]
    Io(#[from] std::io::Error),
}

/// One entry of the extractor's format list
#[derive(Debug, Clone, Deserialize)]
pub struct Format {
    pub url: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
}

impl Format {
    /// yt-dlp reports "none" for an absent codec; a missing field means
    /// the codec is simply unreported, not absent
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }
}

/// The slice of yt-dlp's info mapping this crate consumes. Unknown keys
/// are ignored; every field is optional and defaulted at the call site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<f64>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    pub url: Option<String>,
    pub formats: Option<Vec<Format>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub ext: Option<String>,
}

/// Adapter around the yt-dlp binary. Each call spawns one child process
/// and reaps it before returning; nothing is downloaded.
pub struct Extractor {
    program: String,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            program: "yt-dlp".to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Extractor {
            program: program.into(),
        }
    }

    /// Request full extraction info for a video, optionally constrained to
    /// a format preference string like `best[ext=mp4]/best`
    pub fn extract_info(&self, video_id: &str, format_pref: Option<&str>) -> Result<VideoInfo, ExtractorError> {
        let url = watch_url(video_id);
        debug!("Extracting info via {}: {url}", self.program);

        let mut cmd = Command::new(&self.program);
        cmd.args(["--dump-json", "--no-playlist", "--skip-download", "--no-warnings"]);
        if let Some(pref) = format_pref {
            cmd.args(["-f", pref]);
        }
        cmd.arg(&url);

        let output = match cmd.output() {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExtractorError::ToolNotFound);
            }
            Err(e) => return Err(ExtractorError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("{} exited with {}: {stderr}", self.program, output.status);
            return Err(ExtractorError::Failed(stderr));
        }

        let info: VideoInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new()
    }
}
