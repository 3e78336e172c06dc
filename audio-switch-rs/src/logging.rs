//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use crate::platform::paths;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SESSION_SEPARATOR: &str = "\n------------------------------------------------\n\n";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. With `log_to_file` set, output
/// is also appended to `app.log` in the data directory.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = if config.log_to_file {
        let file = open_log_file(&paths::log_file()?)?;
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Open `path` for appending and mark the start of a new session.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;
    file.write_all(SESSION_SEPARATOR.as_bytes())
        .context("Failed to write log file")?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_appends_session_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");

        drop(open_log_file(&path).unwrap());
        drop(open_log_file(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches(SESSION_SEPARATOR).count(), 2);
    }
}
