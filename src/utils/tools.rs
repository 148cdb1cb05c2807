//! External tool discovery
//!
//! Both yt-dlp and ffmpeg are located the same way:
//! 1. Explicit override (settings, environment or CLI flag)
//! 2. Next to the current executable
//! 3. System PATH
//! 4. Common installation paths (Homebrew, system, user-local)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const YTDLP: &str = "yt-dlp";
pub const FFMPEG: &str = "ffmpeg";

/// Find yt-dlp, preferring `override_path` when it points at a usable file
pub fn find_ytdlp(override_path: Option<&Path>) -> Option<PathBuf> {
    find_tool(YTDLP, override_path)
}

/// Find ffmpeg, preferring `override_path` when it points at a usable file
pub fn find_ffmpeg(override_path: Option<&Path>) -> Option<PathBuf> {
    find_tool(FFMPEG, override_path)
}

/// Find an executable by name using the search order above.
pub fn find_tool(name: &str, override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if is_executable(path) {
            info!("✓ Using configured {}: {:?}", name, path);
            return Some(path.to_path_buf());
        }
        warn!("Configured {} is not an executable file: {:?}", name, path);
    }

    if let Some(adjacent) = find_adjacent(name) {
        info!("✓ Using bundled {}: {:?}", name, adjacent);
        return Some(adjacent);
    }

    if let Ok(path) = which::which(name) {
        info!("✓ Using system {}: {:?}", name, path);
        return Some(path);
    }

    if let Some(common) = find_in_common_paths(name) {
        info!("✓ Using {} from common path: {:?}", name, common);
        return Some(common);
    }

    warn!("✗ {} not found anywhere!", name);
    None
}

/// Look for the tool in the directory holding the current executable
fn find_adjacent(name: &str) -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;
    let candidate = exe_dir.join(binary_name(name));
    debug!("Checking adjacent path: {:?}", candidate);

    if is_executable(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

fn find_in_common_paths(name: &str) -> Option<PathBuf> {
    let mut candidates = vec![
        // macOS Homebrew (Apple Silicon)
        PathBuf::from("/opt/homebrew/bin"),
        // macOS Homebrew (Intel)
        PathBuf::from("/usr/local/bin"),
        // System
        PathBuf::from("/usr/bin"),
    ];
    if let Some(home) = dirs::home_dir() {
        // pip --user / pipx
        candidates.push(home.join(".local").join("bin"));
    }

    candidates
        .into_iter()
        .map(|dir| dir.join(binary_name(name)))
        .find(|path| is_executable(path))
}

fn binary_name(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

/// Check if a path is an executable file
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        match std::fs::metadata(path) {
            Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
