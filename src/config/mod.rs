//! Configuration document model and merge operations
//!
//! This module implements the whole lifecycle of an MCP configuration file:
//! read it in full, mutate the in-memory document, and write it back in full.
//! There is no partial or streamed update. The two mutating entry points,
//! [`apply_upserts`] and [`remove_server`], share the same shape:
//!
//! 1. If the file exists, copy it byte-for-byte to a timestamped backup.
//!    The backup is unconditionally the first observable side effect, so
//!    even a parse failure on the next step leaves a recoverable copy.
//! 2. Load the document (an absent file starts from `{"mcpServers": {}}`).
//! 3. Mutate the `mcpServers` table in memory.
//! 4. Serialize back with 2-space indentation through an atomic
//!    write-then-rename, so the rewrite is all-or-nothing.
//!
//! Server names are unique within a table; upserting an existing name
//! replaces the whole entry (no field-level merge). Every top-level field
//! the model does not know about is carried through a load/save cycle
//! untouched, in file order.
//!
//! No locking is provided. Concurrent invocations against the same path are
//! unsupported and race last-writer-wins.

pub mod fixes;
pub mod flavor;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::McpcfgError;
use crate::utils::{create_backup, write_json_file};

/// One MCP server launch record.
///
/// Two sibling dialects share this shape: Claude Code entries carry
/// `type: "stdio"` and an `env` map, Cursor entries omit both. Serialization
/// skips absent optional fields so each dialect writes only its own field
/// set; unknown fields on an existing entry survive a round trip through the
/// flattened map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerEntry {
    /// Transport type, `"stdio"` in the Claude dialect, absent for Cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The command to execute to start the server
    pub command: String,

    /// Arguments to pass to the command
    #[serde(default)]
    pub args: Vec<String>,

    /// Environment variables to set when running the server (Claude dialect)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Map<String, Value>>,

    /// Fields this tool does not model, preserved verbatim
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ServerEntry {
    /// Build a bare entry from a command and its arguments. Dialect fields
    /// are filled in by [`flavor::ConfigFlavor::normalize`].
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            r#type: None,
            command: command.into(),
            args,
            env: None,
            other: Map::new(),
        }
    }
}

/// An MCP configuration file, loaded in full.
///
/// Modeled fields are the `mcpServers` table and, in the Claude dialect, the
/// `projects` map of per-project sub-documents. Everything else at the root
/// is preserved verbatim through `other`. Key order inside every map follows
/// file order (`serde_json` is built with `preserve_order`).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Map of server names to their configurations
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: Map<String, Value>,

    /// Per-project sub-documents (Claude dialect only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Map<String, Value>>,

    /// Top-level fields this tool does not model, preserved verbatim
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ConfigDocument {
    /// Load an existing configuration file, or start from an empty document
    /// if the path does not exist.
    ///
    /// # Errors
    ///
    /// [`McpcfgError::MalformedDocument`] when the content is not valid JSON
    /// or its root is not an object; [`McpcfgError::IoFailure`] when the
    /// path exists but cannot be read.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} does not exist, starting from an empty document", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(McpcfgError::IoFailure {
                    operation: "read".to_string(),
                    path: path.display().to_string(),
                    reason: err.to_string(),
                }
                .into());
            }
        };

        serde_json::from_str::<Self>(&raw).map_err(|err| {
            McpcfgError::MalformedDocument {
                path: path.display().to_string(),
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// Write the document back to `path` with 2-space indentation, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
    }

    /// Insert or overwrite the server named `name`. A prior entry under the
    /// same name is replaced in full.
    pub fn upsert(&mut self, name: impl Into<String>, entry: &ServerEntry) -> Result<()> {
        let value = serde_json::to_value(entry)?;
        self.mcp_servers.insert(name.into(), value);
        Ok(())
    }

    /// Remove the server named `name`. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.mcp_servers.remove(name).is_some()
    }

    /// Fetch the server named `name` as a typed entry, if present and shaped
    /// like one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ServerEntry> {
        self.mcp_servers
            .get(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Apply a set of named server-entry upserts to the configuration file at
/// `path`, with backup-first, all-or-nothing write semantics.
///
/// Returns the backup path when the file existed beforehand.
pub fn apply_upserts(
    path: &Path,
    entries: Vec<(String, ServerEntry)>,
) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        Some(create_backup(path)?)
    } else {
        None
    };

    let mut document = ConfigDocument::load_or_default(path)?;
    for (name, entry) in entries {
        debug!("upserting MCP server '{name}' into {}", path.display());
        document.upsert(name, &entry)?;
    }
    document.save(path)?;

    Ok(backup)
}

/// Remove one named server entry from the configuration file at `path`,
/// with the same backup-first semantics as [`apply_upserts`].
///
/// # Errors
///
/// [`McpcfgError::MissingEntry`] when the name is not configured; the file
/// is left untouched (the backup, if one was taken, remains).
pub fn remove_server(path: &Path, name: &str) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        Some(create_backup(path)?)
    } else {
        None
    };

    let mut document = ConfigDocument::load_or_default(path)?;
    if !document.remove(name) {
        return Err(McpcfgError::MissingEntry {
            name: name.to_string(),
            path: path.display().to_string(),
        }
        .into());
    }
    document.save(path)?;

    Ok(backup)
}
