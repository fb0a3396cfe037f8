//! Common test utilities for the mcpcfg integration tests

// Allow dead code because these utilities are shared across test modules
// and not all of them are used in every module
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Build a command invoking the compiled mcpcfg binary.
pub fn mcpcfg() -> Command {
    Command::cargo_bin("mcpcfg").expect("mcpcfg binary should build")
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

/// All backup files written for `path`, sorted by name.
pub fn backups_of(path: &Path) -> Vec<PathBuf> {
    let prefix = format!(
        "{}.backup-",
        path.file_name().unwrap().to_str().unwrap()
    );
    let mut backups: Vec<PathBuf> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&prefix))
        })
        .collect();
    backups.sort();
    backups
}

/// A Claude-dialect fixture with top-level and project-scoped servers,
/// including entries the repair rules should and should not touch.
pub fn claude_fixture() -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "numStartups": 5,
        "mcpServers": {
            "filesystem": {
                "type": "stdio",
                "command": "node",
                "args": ["/old/build/index.js"],
                "env": {}
            },
            "memory": {
                "type": "stdio",
                "command": "mcp-server-memory",
                "args": [],
                "env": {}
            }
        },
        "projects": {
            "/home/x": {
                "allowedTools": [],
                "mcpServers": {
                    "filesystem-old": {
                        "type": "stdio",
                        "command": "node",
                        "args": ["/broken"],
                        "env": {}
                    },
                    "github": {
                        "type": "stdio",
                        "command": "mcp-server-github",
                        "args": [],
                        "env": {}
                    }
                }
            }
        }
    }))
    .unwrap()
}
