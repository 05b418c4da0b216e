//! Profile files on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::PROFILE_FILE_EXTENSION;

/// Creates the output directory (and its parents) if it does not exist yet.
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Path of the file a profile named `name` is written to.
pub fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{PROFILE_FILE_EXTENSION}"))
}

/// Writes `content` to `<dir>/<name>.txt`, replacing any previous file.
pub async fn write_profile(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = profile_path(dir, name);
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write profile {name} to {}", path.display()))?;
    Ok(path)
}
