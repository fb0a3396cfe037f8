//! Error handling and edge cases

use crate::common::{backups_of, mcpcfg};
use tempfile::tempdir;

#[test]
fn malformed_file_aborts_after_backup_and_original_is_untouched() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");
    std::fs::write(&path, "{definitely not json").unwrap();

    mcpcfg()
        .args(["add", "memory", "--command", "mcp-server-memory"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("malformed configuration document"));

    // The original bytes are untouched and the backup step already ran,
    // so the operator has a copy to recover from
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{definitely not json"
    );
    let backups = backups_of(&path);
    assert_eq!(backups.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&backups[0]).unwrap(),
        "{definitely not json"
    );
}

#[test]
fn non_object_root_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("claude.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    mcpcfg()
        .args(["add", "memory", "--command", "mcp-server-memory"])
        .args(["--path", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("malformed configuration document"));
}

#[test]
fn unknown_tool_is_rejected_with_hint() {
    mcpcfg()
        .args(["list", "--tool", "zed"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown tool 'zed'"))
        .stderr(predicates::str::contains("'claude' and 'cursor'"));
}

#[test]
fn repeated_adds_yield_identical_documents() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mcp.json");

    let add = |p: &std::path::Path| {
        mcpcfg()
            .args(["add", "memory", "--command", "mcp-server-memory"])
            .args(["--tool", "cursor", "--path", p.to_str().unwrap()])
            .assert()
            .success();
    };

    add(&path);
    let first = std::fs::read_to_string(&path).unwrap();
    add(&path);
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}
