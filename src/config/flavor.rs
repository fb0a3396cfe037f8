//! Per-tool configuration dialects
//!
//! Each supported host application stores its MCP server table in a
//! different file and with a slightly different entry shape. A
//! [`ConfigFlavor`] bundles the default file location with the entry
//! normalization for that dialect, so the rest of the tool can treat both
//! targets uniformly.

use anyhow::{Context, Result};
use serde_json::Map;
use std::path::PathBuf;

use super::ServerEntry;

/// A supported host application and its configuration dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFlavor {
    /// Claude Code: `~/.claude.json`, entries carry `type: "stdio"` and `env`
    Claude,
    /// Cursor: `~/.cursor/mcp.json`, entries carry only `command` and `args`
    Cursor,
}

impl ConfigFlavor {
    /// Look up a flavor by tool name, or `None` if the tool is unsupported.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "claude" => Some(Self::Claude),
            "cursor" => Some(Self::Cursor),
            _ => None,
        }
    }

    /// The tool name this flavor was looked up by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Cursor => "cursor",
        }
    }

    /// Default configuration file location for this tool.
    pub fn default_config_path(self) -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(match self {
            Self::Claude => home.join(".claude.json"),
            Self::Cursor => home.join(".cursor").join("mcp.json"),
        })
    }

    /// Rewrite an entry into this flavor's dialect before insertion.
    ///
    /// Claude entries always get `type: "stdio"` and a concrete `env` map;
    /// Cursor entries carry neither. Normalizing here means an upsert can
    /// never leave a foreign-dialect field set behind in the target file.
    #[must_use]
    pub fn normalize(self, mut entry: ServerEntry) -> ServerEntry {
        match self {
            Self::Claude => {
                entry.r#type = Some("stdio".to_string());
                entry.env = Some(entry.env.take().unwrap_or_else(Map::new));
            }
            Self::Cursor => {
                entry.r#type = None;
                entry.env = None;
            }
        }
        entry
    }
}
