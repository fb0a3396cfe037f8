//! Tests for the `add` command

use crate::common::{backups_of, mcpcfg, read_json};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn add_creates_claude_file_from_nothing() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");

    mcpcfg()
        .args(["add", "memory", "--command", "mcp-server-memory"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Configured MCP server 'memory'"));

    let written = read_json(&path);
    assert_eq!(
        written,
        json!({
            "mcpServers": {
                "memory": {
                    "type": "stdio",
                    "command": "mcp-server-memory",
                    "args": [],
                    "env": {}
                }
            }
        })
    );
    // No backup for a file that did not exist
    assert!(backups_of(&path).is_empty());
}

#[test]
fn add_cursor_dialect_omits_type_and_env() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mcp.json");

    mcpcfg()
        .args(["add", "fetch", "--command", "uvx", "-a", "mcp-server-fetch"])
        .args(["--tool", "cursor", "--path", path.to_str().unwrap()])
        .assert()
        .success();

    let written = read_json(&path);
    assert_eq!(
        written,
        json!({
            "mcpServers": {
                "fetch": {"command": "uvx", "args": ["mcp-server-fetch"]}
            }
        })
    );
}

#[test]
fn add_env_pairs_land_in_claude_entry() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");

    mcpcfg()
        .args(["add", "github", "--command", "mcp-server-github"])
        .args(["-e", "GITHUB_TOKEN=abc123"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .success();

    let written = read_json(&path);
    assert_eq!(
        written["mcpServers"]["github"]["env"],
        json!({"GITHUB_TOKEN": "abc123"})
    );
}

#[test]
fn add_overwrites_existing_entry_and_backs_up() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");
    let original = r#"{"mcpServers": {"memory": {"type": "stdio", "command": "old-command", "args": ["x"], "env": {"KEEP": "no"}}}}"#;
    std::fs::write(&path, original).unwrap();

    mcpcfg()
        .args(["add", "memory", "--command", "mcp-server-memory"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("backed up to"));

    // Whole-entry replacement: old args and env are gone
    let written = read_json(&path);
    assert_eq!(
        written["mcpServers"]["memory"],
        json!({
            "type": "stdio",
            "command": "mcp-server-memory",
            "args": [],
            "env": {}
        })
    );

    let backups = backups_of(&path);
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), original);
}

#[test]
fn add_preserves_unrelated_entries_and_fields() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");
    std::fs::write(
        &path,
        r#"{"numStartups": 3, "mcpServers": {"fetch": {"type": "stdio", "command": "uvx", "args": [], "env": {}}}}"#,
    )
    .unwrap();

    mcpcfg()
        .args(["add", "memory", "--command", "mcp-server-memory"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .success();

    let written = read_json(&path);
    assert_eq!(written["numStartups"], json!(3));
    assert_eq!(written["mcpServers"]["fetch"]["command"], json!("uvx"));
    assert!(written["mcpServers"]["memory"].is_object());
}

#[test]
fn add_rejects_malformed_env_pair() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");

    mcpcfg()
        .args(["add", "github", "--command", "mcp-server-github"])
        .args(["-e", "NOTAPAIR"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("expected KEY=VALUE"));

    assert!(!path.exists());
}
