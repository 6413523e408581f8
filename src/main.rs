use std::path::PathBuf;
use std::process::Command;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytprobe::envelope::Envelope;
use ytprobe::extractor::Extractor;
use ytprobe::{extract_video_id, metadata, stream, transcript};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytprobe.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytprobe")
        .join("logs")
}

fn tool_version(name: &str) -> Option<String> {
    Command::new(name)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .lines()
                .next()
                .unwrap_or("")
                .to_string()
        })
}

fn build_after_help() -> String {
    let yt_dlp = tool_version("yt-dlp");

    let yt_dlp_line = match &yt_dlp {
        Some(v) => format!("  \x1b[32m✅\x1b[0m yt-dlp     {v}"),
        None => "  \x1b[31m❌\x1b[0m yt-dlp     (not found — needed for metadata and stream)".to_string(),
    };

    let log_path = log_dir().join("ytprobe.log");

    format!(
        "\nREQUIRED TOOLS:\n{yt_dlp_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Best-effort: stdout must carry nothing but the JSON envelope
    let _ = setup_logging();

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytprobe::config::Config::load().unwrap_or_default();

    let (Some(command), Some(video_input)) = (cli.command, cli.video_id) else {
        println!("{}", Envelope::usage().render());
        std::process::exit(1);
    };

    let lang = cli
        .lang
        .or(config.default_lang)
        .unwrap_or_else(|| "en".to_string());

    // Accept full URLs too; unrecognized input goes through untouched
    let video_id = extract_video_id(&video_input).unwrap_or(video_input);

    if cli.verbose {
        let config_path = ytprobe::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Operation: {command}\nVideo: {video_id}\nLanguage: {lang}");
    }

    let extractor = match config.ytdlp_path {
        Some(path) => Extractor::with_program(path),
        None => Extractor::new(),
    };

    let envelope = match command.as_str() {
        "metadata" => match metadata::fetch(&extractor, &video_id) {
            Ok(data) => Envelope::ok(data),
            Err(e) => {
                debug!("metadata fetch failed for {video_id}: {e}");
                Envelope::fail(e.to_string())
            }
        },
        "transcript" => {
            let client = reqwest::Client::new();
            match transcript::fetch(&client, &video_id, &lang).await {
                Ok(data) => Envelope::ok(data),
                Err(e) => {
                    debug!("transcript fetch failed for {video_id}: {e}");
                    Envelope::fail(e.to_string())
                }
            }
        }
        "stream" => match stream::fetch(&extractor, &video_id) {
            Ok(data) => Envelope::ok(data),
            Err(e) => {
                debug!("stream fetch failed for {video_id}: {e}");
                Envelope::fail(e.to_string())
            }
        },
        other => Envelope::unknown_command(other),
    };

    println!("{}", envelope.render());

    Ok(())
}
