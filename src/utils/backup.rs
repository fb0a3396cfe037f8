//! Timestamped backup copies of configuration files
//!
//! Backups are plain byte-for-byte siblings of the original file, named
//! `<path>.backup-<YYYYMMDD-HHMMSS>` in local time. A backup is taken before
//! any mutation, so a failure at any later step still leaves the operator a
//! copy to restore from.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::McpcfgError;

/// Build the backup path for `path` at the given timestamp.
#[must_use]
pub fn backup_path_for(path: &Path, timestamp: &DateTime<Local>) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".backup-{}", timestamp.format("%Y%m%d-%H%M%S")));
    PathBuf::from(name)
}

/// Copy `path` byte-for-byte to a timestamped backup sibling.
///
/// If two invocations land in the same second, the later backup gets a
/// numeric suffix instead of clobbering the earlier one. Returns the path
/// of the backup that was written.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let candidate = backup_path_for(path, &Local::now());
    let backup_path = first_free_path(candidate);

    fs::copy(path, &backup_path).map_err(|err| McpcfgError::IoFailure {
        operation: "backup".to_string(),
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    tracing::debug!("backed up {} to {}", path.display(), backup_path.display());
    Ok(backup_path)
}

fn first_free_path(candidate: PathBuf) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }
    let mut counter = 1u32;
    loop {
        let mut name = candidate.as_os_str().to_os_string();
        name.push(format!("-{counter}"));
        let next = PathBuf::from(name);
        if !next.exists() {
            return next;
        }
        counter += 1;
    }
}
