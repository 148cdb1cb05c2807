//! streamgrab - list and download media streams through yt-dlp

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use streamgrab::downloader::{ContentFetcher, GenericFetcher, CONTENT_SUCCESS, GENERIC_SUCCESS};
use streamgrab::extractor::{MediaProvider, YtDlpExtractor};
use streamgrab::selector::{StreamEnumerator, ERROR_PREFIX};
use streamgrab::utils::{self, AppSettings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streamgrab", version, about)]
struct Args {
    /// Log yt-dlp invocations and selection details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// yt-dlp binary to use
    #[arg(long, global = true)]
    ytdlp: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the best stream per video resolution and audio bitrate
    Streams {
        url: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download one format as video.<ext> or audio.<ext>
    Fetch {
        /// Format id (itag) from `streams`
        format_id: String,
        url: String,

        /// Save as audio.<ext> instead of video.<ext>
        #[arg(long)]
        audio: bool,

        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Download the best available video+audio under the source's title
    Grab {
        url: String,

        /// ffmpeg binary used for merging
        #[arg(long)]
        ffmpeg: Option<PathBuf>,

        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = AppSettings::load()?;
    if args.ytdlp.is_some() {
        settings.ytdlp_path = args.ytdlp.clone();
    }

    let provider: Arc<dyn MediaProvider> = Arc::new(
        YtDlpExtractor::new(settings.ytdlp_path.as_deref())
            .context("yt-dlp is required: pip install yt-dlp, or pass --ytdlp")?
            .quiet(settings.quiet),
    );

    let succeeded = match args.command {
        Commands::Streams { url, json } => {
            let enumerator = StreamEnumerator::new(provider);
            if json {
                let summary = enumerator.enumerate(&url).await?;
                println!("{}", serde_json::to_string_pretty(&summary)?);
                true
            } else {
                let text = enumerator.summarize(&url).await;
                println!("{}", text);
                !text.starts_with(ERROR_PREFIX)
            }
        }
        Commands::Fetch {
            format_id,
            url,
            audio,
            dir,
        } => {
            let dir = dir.unwrap_or_else(|| settings.download_location.clone());
            let status = ContentFetcher::new(provider)
                .fetch_status(&format_id, &url, !audio, &dir)
                .await;
            println!("{}", status);
            status == CONTENT_SUCCESS
        }
        Commands::Grab { url, ffmpeg, dir } => {
            let dir = dir.unwrap_or_else(|| settings.download_location.clone());
            let ffmpeg = ffmpeg.or(settings.ffmpeg_path.clone());
            let mux_tool = utils::find_ffmpeg(ffmpeg.as_deref())
                .context("ffmpeg is required for merging: install it, or pass --ffmpeg")?;
            let status = GenericFetcher::new(provider)
                .fetch_status(&url, &mux_tool, &dir)
                .await;
            println!("{}", status);
            status == GENERIC_SUCCESS
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
