//! Per-user application directories.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "Nixpare", "AudioSwitch")
        .context("Failed to determine application directories")
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Directory holding `app.log`.
pub fn data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Path of the log file.
pub fn log_file() -> Result<PathBuf> {
    Ok(data_dir()?.join("app.log"))
}
