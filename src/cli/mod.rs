//! Command-line interface for mcpcfg
//!
//! Each command lives in its own module as a clap `Args` struct with an
//! `execute()` method:
//!
//! - `add` - insert or overwrite one MCP server entry
//! - `fix` - repair known-broken entries, including project-scoped ones
//! - `list` - show the configured servers
//! - `remove` - delete one entry
//!
//! Every command targets either Claude Code or Cursor via `--tool`
//! (defaulting to `claude`), and accepts `--path` to operate on a file
//! outside the default location. The global `--verbose` and `--quiet` flags
//! control diagnostic log output; command results always print.
//!
//! # Examples
//!
//! ```bash
//! mcpcfg add memory --command mcp-server-memory
//! mcpcfg add fs --command npx -a @modelcontextprotocol/server-filesystem -a /data
//! mcpcfg fix --tool claude --root /home/me
//! mcpcfg list --tool cursor
//! mcpcfg remove fs
//! ```

mod add;
pub mod common;
mod fix;
mod list;
mod remove;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Top-level CLI parser.
#[derive(Parser)]
#[command(
    name = "mcpcfg",
    about = "Backup-safe manager for MCP server entries in Claude Code and Cursor configuration files",
    version,
    long_about = "mcpcfg edits the mcpServers tables of ~/.claude.json and ~/.cursor/mcp.json, \
                  writing a timestamped backup before every change."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress diagnostic log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add or overwrite an MCP server entry
    Add(add::AddCommand),

    /// Repair known-broken server entries (filesystem, sequential-thinking)
    Fix(fix::FixCommand),

    /// List the configured MCP servers
    List(list::ListCommand),

    /// Remove an MCP server entry
    Remove(remove::RemoveCommand),
}

impl Cli {
    /// Initialize logging from the verbosity flags, then run the selected
    /// command.
    pub fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        match self.command {
            Commands::Add(cmd) => cmd.execute(),
            Commands::Fix(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
            Commands::Remove(cmd) => cmd.execute(),
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if verbose {
        "mcpcfg=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
