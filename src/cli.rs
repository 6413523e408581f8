use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytprobe",
    about = "Fetch YouTube metadata, transcripts, and stream URLs as JSON",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Operation to run: metadata, transcript, or stream
    pub command: Option<String>,

    /// YouTube video ID or URL
    pub video_id: Option<String>,

    /// Preferred transcript language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Show operation details on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
