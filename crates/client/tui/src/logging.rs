//! File-only tracing setup.
//!
//! The TUI owns the terminal, so nothing may log to stderr while it runs;
//! everything goes to a daily-rolled file instead.
use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. The returned guard must stay alive for
/// the process lifetime or buffered lines are lost.
pub fn setup_logging(dir_override: Option<PathBuf>) -> Result<WorkerGuard> {
    let log_dir = dir_override.unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(dir = %log_dir.display(), "logging initialized");

    Ok(guard)
}

/// Platform cache directory, with a `/tmp` last resort.
fn default_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push("Library");
            path.push("Caches");
            path.push("greycity");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            let mut path = PathBuf::from(xdg_cache);
            path.push("greycity");
            path.push("logs");
            return path;
        } else if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".cache");
            path.push("greycity");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            let mut path = PathBuf::from(local_appdata);
            path.push("greycity");
            path.push("logs");
            return path;
        }
    }

    PathBuf::from("/tmp/greycity/logs")
}
