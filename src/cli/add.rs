//! `mcpcfg add` - insert or overwrite one MCP server entry
//!
//! The entry is normalized into the target tool's dialect before insertion:
//! Claude entries get `type: "stdio"` and an `env` map, Cursor entries carry
//! only `command` and `args`. An existing entry under the same name is
//! replaced in full.

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use super::common::{parse_env_pair, resolve_target};
use crate::config::{self, ServerEntry};

/// Add or overwrite an MCP server entry.
#[derive(Args)]
pub struct AddCommand {
    /// Server name (an existing entry with this name is replaced)
    name: String,

    /// Command used to launch the server
    #[arg(long)]
    command: String,

    /// Argument passed to the command (repeatable, in order)
    #[arg(short = 'a', long = "arg", value_name = "ARG")]
    args: Vec<String>,

    /// Environment variable for the server, as KEY=VALUE (repeatable;
    /// ignored by the Cursor dialect)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    env: Vec<String>,

    /// Target tool: claude or cursor
    #[arg(long, default_value = "claude")]
    tool: String,

    /// Configuration file to edit instead of the tool's default location
    #[arg(long)]
    path: Option<String>,
}

impl AddCommand {
    pub fn execute(self) -> Result<()> {
        let (flavor, path) = resolve_target(&self.tool, self.path.as_deref())?;

        let mut entry = ServerEntry::new(self.command, self.args);
        if !self.env.is_empty() {
            let mut env = Map::new();
            for pair in &self.env {
                let (key, value) = parse_env_pair(pair)?;
                env.insert(key, Value::String(value));
            }
            entry.env = Some(env);
        }
        let entry = flavor.normalize(entry);

        let backup = config::apply_upserts(&path, vec![(self.name.clone(), entry)])?;

        println!("✓ Configured MCP server '{}' in {}", self.name, path.display());
        if let Some(backup) = backup {
            println!("  previous configuration backed up to {}", backup.display());
        }
        Ok(())
    }
}
