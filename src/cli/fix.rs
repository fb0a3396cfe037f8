//! `mcpcfg fix` - repair known-broken server entries
//!
//! Applies the built-in repair rules to the target file: entries whose name
//! contains `filesystem` are repointed at the official filesystem server
//! (rooted at `--root`), and entries whose name contains `thinking` or
//! `sequential` at the sequential-thinking server. For Claude configurations
//! the pass also walks every `projects.*.mcpServers` table.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::common::resolve_target;
use crate::config::fixes::{apply_fixes, default_rules};

/// Repair known-broken server entries.
#[derive(Args)]
pub struct FixCommand {
    /// Target tool: claude or cursor
    #[arg(long, default_value = "claude")]
    tool: String,

    /// Configuration file to repair instead of the tool's default location
    #[arg(long)]
    path: Option<String>,

    /// Directory the filesystem server is granted access to
    /// (defaults to the home directory)
    #[arg(long)]
    root: Option<PathBuf>,
}

impl FixCommand {
    pub fn execute(self) -> Result<()> {
        let (_, path) = resolve_target(&self.tool, self.path.as_deref())?;

        let root = match self.root {
            Some(root) => root,
            None => dirs::home_dir().context("Could not determine the home directory")?,
        };
        let rules = default_rules(&root);

        let outcome = apply_fixes(&path, &rules)?;

        if outcome.report.total() == 0 {
            println!("No matching MCP server entries to fix in {}", path.display());
        } else {
            println!(
                "✓ Rewrote {} top-level and {} project-scoped server entr{} in {}",
                outcome.report.top_level,
                outcome.report.project_level,
                if outcome.report.total() == 1 { "y" } else { "ies" },
                path.display()
            );
        }
        if let Some(backup) = outcome.backup {
            println!("  previous configuration backed up to {}", backup.display());
        }
        Ok(())
    }
}
