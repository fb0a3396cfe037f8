//! mcpcfg - backup-safe manager for MCP server configuration entries
//!
//! `mcpcfg` edits the MCP (Model Context Protocol) server tables inside the
//! JSON configuration files of two host applications:
//!
//! - **Claude Code** (`~/.claude.json`) - entries carry `"type": "stdio"` and
//!   an `env` map, and the file holds a `projects` map whose per-project
//!   sub-documents may contain their own `mcpServers` tables
//! - **Cursor** (`~/.cursor/mcp.json`) - entries carry only `command` and
//!   `args`
//!
//! Every mutating command copies the original file byte-for-byte to a
//! timestamped sibling (`<path>.backup-<YYYYMMDD-HHMMSS>`) before touching
//! it, then rewrites the file atomically via a temp-file-and-rename, so the
//! previous configuration is always recoverable and no partial write is ever
//! observable.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`add`, `fix`, `list`, `remove`)
//! - [`config`] - Configuration document model, merge and repair operations
//! - [`core`] - Error types and user-facing error rendering
//! - [`utils`] - Atomic file writes and backup creation
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Add or overwrite a server entry in ~/.claude.json
//! mcpcfg add memory --command mcp-server-memory
//!
//! # Same entry for Cursor (type/env are stripped automatically)
//! mcpcfg add memory --command mcp-server-memory --tool cursor
//!
//! # Repair known-broken filesystem / sequential-thinking entries,
//! # including project-scoped ones
//! mcpcfg fix --root /home/me
//!
//! # Inspect what is configured
//! mcpcfg list --tool cursor
//!
//! # Remove an entry
//! mcpcfg remove memory
//! ```
//!
//! The library surface mirrors the CLI: [`config::apply_upserts`],
//! [`config::remove_server`], and [`config::fixes::apply_fixes`] are the
//! three file-level operations, all with backup-first semantics.

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
