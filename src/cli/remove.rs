//! `mcpcfg remove` - delete one MCP server entry

use anyhow::Result;
use clap::Args;

use super::common::resolve_target;
use crate::config;

/// Remove an MCP server entry.
#[derive(Args)]
pub struct RemoveCommand {
    /// Server name to remove
    name: String,

    /// Target tool: claude or cursor
    #[arg(long, default_value = "claude")]
    tool: String,

    /// Configuration file to edit instead of the tool's default location
    #[arg(long)]
    path: Option<String>,
}

impl RemoveCommand {
    pub fn execute(self) -> Result<()> {
        let (_, path) = resolve_target(&self.tool, self.path.as_deref())?;

        let backup = config::remove_server(&path, &self.name)?;

        println!("✓ Removed MCP server '{}' from {}", self.name, path.display());
        if let Some(backup) = backup {
            println!("  previous configuration backed up to {}", backup.display());
        }
        Ok(())
    }
}
