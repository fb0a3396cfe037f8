//! Tests for the `remove` command

use crate::common::{backups_of, mcpcfg, read_json};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn remove_deletes_entry_and_backs_up() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mcp.json");
    let original =
        r#"{"mcpServers": {"memory": {"command": "mcp-server-memory"}, "fetch": {"command": "uvx"}}}"#;
    std::fs::write(&path, original).unwrap();

    mcpcfg()
        .args(["remove", "memory", "--tool", "cursor"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed MCP server 'memory'"));

    let written = read_json(&path);
    assert_eq!(written["mcpServers"], json!({"fetch": {"command": "uvx"}}));

    let backups = backups_of(&path);
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), original);
}

#[test]
fn remove_missing_entry_fails_and_leaves_file_untouched() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mcp.json");
    let original = r#"{"mcpServers": {"fetch": {"command": "uvx"}}}"#;
    std::fs::write(&path, original).unwrap();

    mcpcfg()
        .args(["remove", "memory", "--tool", "cursor"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}
