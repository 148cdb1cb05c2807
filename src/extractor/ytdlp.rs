//! yt-dlp wrapper
//!
//! Runs yt-dlp as a child process: `--dump-single-json` for metadata and a
//! plain invocation with `-o`/`-f` for downloads. Each call spawns one
//! process and waits for it to exit.

use crate::extractor::models::{DownloadOptions, MediaInfo};
use crate::extractor::traits::MediaProvider;
use crate::utils::error::ProviderFailure;
use crate::utils::tools;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, Command};
use tracing::{debug, error, info};

/// Media provider backed by the yt-dlp executable
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
    quiet: bool,
}

impl YtDlpExtractor {
    /// Locate yt-dlp (see [`tools::find_ytdlp`]) and build an extractor for it
    pub fn new(override_path: Option<&Path>) -> Result<Self, ProviderFailure> {
        match tools::find_ytdlp(override_path) {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self::with_path(path))
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(ProviderFailure::ToolNotFound)
            }
        }
    }

    /// Use a specific yt-dlp binary without searching
    pub fn with_path(ytdlp_path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: ytdlp_path.into(),
            quiet: false,
        }
    }

    /// Pass `--quiet` to every invocation
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }

    /// Arguments for a metadata-only run
    fn info_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-single-json".to_string(),
            "--no-download".to_string(),
            "--no-warnings".to_string(),
        ];
        if self.quiet {
            args.push("--quiet".to_string());
        }
        // Keep the URL from being read as an option
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// Arguments for a download run
    fn download_args(&self, url: &str, options: &DownloadOptions) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            options.output_template.clone(),
            "-f".to_string(),
            options.format.clone(),
        ];
        if let Some(ffmpeg) = &options.ffmpeg_location {
            args.push("--ffmpeg-location".to_string());
            args.push(ffmpeg.to_string_lossy().into_owned());
        }
        if self.quiet {
            args.push("--quiet".to_string());
        }
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }
}

/// Prefix yt-dlp puts on the lines describing why a run failed
const ERROR_LINE_PREFIX: &str = "ERROR:";

/// Copy a child's stderr to ours line by line, keeping the `ERROR:` lines
async fn tee_error_lines(stderr: ChildStderr) -> std::io::Result<Vec<String>> {
    let mut lines = BufReader::new(stderr).lines();
    let mut errors = Vec::new();

    while let Some(line) = lines.next_line().await? {
        eprintln!("{}", line);
        if line.starts_with(ERROR_LINE_PREFIX) {
            errors.push(line);
        }
    }

    Ok(errors)
}

#[async_trait]
impl MediaProvider for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract_info(&self, url: &str) -> Result<MediaInfo, ProviderFailure> {
        debug!("Extracting media info for URL: {}", url);

        let output = Command::new(&self.ytdlp_path)
            .args(self.info_args(url))
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let failure = ProviderFailure::from_stderr(&output.stderr);
            error!("yt-dlp extraction failed: {}", failure);
            return Err(failure);
        }

        let json_str = String::from_utf8(output.stdout)?;
        let info: MediaInfo = serde_json::from_str(&json_str)?;
        debug!("yt-dlp reported {} formats for {}", info.formats.len(), url);

        Ok(info)
    }

    async fn download(&self, url: &str, options: &DownloadOptions) -> Result<i32, ProviderFailure> {
        info!(
            "Downloading {} with format {} to {}",
            url, options.format, options.output_template
        );

        // stdout stays inherited so yt-dlp's progress output is visible;
        // stderr is teed so a failure can report yt-dlp's own message
        let mut child = Command::new(&self.ytdlp_path)
            .args(self.download_args(url, options))
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let errors = match child.stderr.take() {
            Some(stderr) => tee_error_lines(stderr).await?,
            None => Vec::new(),
        };
        let status = child.wait().await?;

        match status.code() {
            Some(0) => Ok(0),
            Some(code) if !errors.is_empty() => {
                let failure = ProviderFailure::Extraction(errors.join("\n"));
                error!("yt-dlp download failed with status {}: {}", code, failure);
                Err(failure)
            }
            Some(code) => {
                debug!("yt-dlp exited with status {}", code);
                Ok(code)
            }
            None => {
                error!("yt-dlp was terminated before finishing {}", url);
                Err(ProviderFailure::Terminated)
            }
        }
    }
}
