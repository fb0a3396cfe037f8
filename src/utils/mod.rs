//! Filesystem plumbing
//!
//! - [`fs`] - atomic writes and JSON serialization to disk
//! - [`backup`] - timestamped byte-for-byte backup copies

pub mod backup;
pub mod fs;

pub use backup::{backup_path_for, create_backup};
pub use fs::{atomic_write, ensure_parent_dir, write_json_file};
