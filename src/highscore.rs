//! High-score persistence: one decimal integer in a text file.

use std::path::Path;

use crate::error::{GameError, Result};

/// Stored high score; a missing or unreadable file counts as 0.
pub fn load(path: &Path) -> u32 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save(path: &Path, score: u32) -> Result<()> {
    std::fs::write(path, score.to_string()).map_err(|source| GameError::HighScoreWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist `score` if it beats the stored value. Returns whether the file
/// was updated.
pub fn record(path: &Path, score: u32) -> Result<bool> {
    let stored = load(path);
    if score <= stored {
        return Ok(false);
    }
    save(path, score)?;
    log::info!("new high score {} (was {})", score, stored);
    Ok(true)
}
