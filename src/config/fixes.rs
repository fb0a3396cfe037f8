//! Repair rules for known-broken server entries
//!
//! Host applications accumulate stale MCP server entries: a filesystem
//! server still pointing at a deleted build directory, a sequential-thinking
//! server registered under a one-off launch script. The repair pass rewrites
//! the `command` and `args` of every entry whose name matches a rule, both
//! in the top-level `mcpServers` table and inside every
//! `projects.*.mcpServers` table of a Claude configuration.
//!
//! Only existing entries are rewritten. The pass never creates or removes an
//! entry, and non-matching siblings are untouched. Fields other than
//! `command` and `args` (including `env` and `type`) are left as they are.

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ConfigDocument;
use crate::utils::create_backup;

/// One repair rule: entries whose name contains any of the substrings get
/// their launch command and arguments replaced.
#[derive(Debug, Clone)]
pub struct FixRule {
    /// Human-readable rule name, used in log output
    pub label: &'static str,
    /// A server entry matches when its name contains any of these
    pub name_substrings: &'static [&'static str],
    /// Replacement launch command
    pub command: &'static str,
    /// Replacement argument list
    pub args: Vec<String>,
}

impl FixRule {
    /// Whether a server of the given name is covered by this rule.
    #[must_use]
    pub fn matches(&self, server_name: &str) -> bool {
        self.name_substrings.iter().any(|s| server_name.contains(s))
    }
}

/// The built-in repair rules.
///
/// `filesystem_root` is the directory the filesystem server is granted
/// access to; callers default it to the user's home directory.
#[must_use]
pub fn default_rules(filesystem_root: &Path) -> Vec<FixRule> {
    vec![
        FixRule {
            label: "filesystem",
            name_substrings: &["filesystem"],
            command: "npx",
            args: vec![
                "@modelcontextprotocol/server-filesystem".to_string(),
                filesystem_root.display().to_string(),
            ],
        },
        FixRule {
            label: "sequential-thinking",
            name_substrings: &["thinking", "sequential"],
            command: "npx",
            args: vec!["@modelcontextprotocol/server-sequential-thinking".to_string()],
        },
    ]
}

/// Counts of rewritten entries per scope.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Rewrites in the top-level `mcpServers` table
    pub top_level: usize,
    /// Rewrites inside `projects.*.mcpServers` tables
    pub project_level: usize,
}

impl FixReport {
    /// Total number of rewritten entries.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.top_level + self.project_level
    }
}

/// Outcome of [`apply_fixes`]: the backup taken (if the file existed) and
/// the per-scope rewrite counts.
#[derive(Debug, Default)]
pub struct FixOutcome {
    /// Backup path, when the file existed before the pass
    pub backup: Option<PathBuf>,
    /// Per-scope rewrite counts
    pub report: FixReport,
}

/// Rewrite matching entries on an in-memory document.
pub fn apply_rules(document: &mut ConfigDocument, rules: &[FixRule]) -> FixReport {
    let mut report = FixReport {
        top_level: rewrite_matching(&mut document.mcp_servers, rules),
        project_level: 0,
    };

    if let Some(projects) = document.projects.as_mut() {
        for (project_path, project) in projects.iter_mut() {
            let Some(project_obj) = project.as_object_mut() else {
                continue;
            };
            let Some(servers) = project_obj.get_mut("mcpServers").and_then(Value::as_object_mut)
            else {
                continue;
            };
            let rewritten = rewrite_matching(servers, rules);
            if rewritten > 0 {
                debug!("rewrote {rewritten} server(s) under project {project_path}");
            }
            report.project_level += rewritten;
        }
    }

    report
}

/// Run the repair pass against the configuration file at `path`, with the
/// same backup-first, all-or-nothing write semantics as the merge
/// operations.
///
/// A missing file is reported as zero rewrites and is not created.
pub fn apply_fixes(path: &Path, rules: &[FixRule]) -> Result<FixOutcome> {
    if !path.exists() {
        debug!("{} does not exist, nothing to fix", path.display());
        return Ok(FixOutcome::default());
    }

    let backup = create_backup(path)?;
    let mut document = ConfigDocument::load_or_default(path)?;
    let report = apply_rules(&mut document, rules);
    document.save(path)?;

    Ok(FixOutcome {
        backup: Some(backup),
        report,
    })
}

fn rewrite_matching(servers: &mut Map<String, Value>, rules: &[FixRule]) -> usize {
    let mut rewritten = 0;
    for (name, value) in servers.iter_mut() {
        let Some(rule) = rules.iter().find(|rule| rule.matches(name)) else {
            continue;
        };
        let Some(entry) = value.as_object_mut() else {
            continue;
        };
        debug!("applying '{}' rule to server '{name}'", rule.label);
        entry.insert("command".to_string(), Value::String(rule.command.to_string()));
        entry.insert(
            "args".to_string(),
            Value::Array(rule.args.iter().cloned().map(Value::String).collect()),
        );
        rewritten += 1;
    }
    rewritten
}
