// End-to-end: the wrapper binary against an empty home, with no server
// executable to delegate to.

use std::fs;
use std::process::Command;

#[test]
fn test_missing_server_exits_nonzero_and_logs_fatal_error() {
    let home = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_reaper-mcp-debug"))
        .env("HOME", home.path())
        .env_remove("REAPER_BRIDGE_DIR")
        .env_remove("REAPER_COMM_MODE")
        .env_remove("REAPER_HOST")
        .env_remove("REAPER_PORT")
        .output()
        .expect("wrapper binary should run");

    assert_eq!(output.status.code(), Some(1));

    let log = fs::read_to_string(home.path().join("reaper_mcp_debug.log"))
        .expect("debug log should exist");
    assert!(log.contains("REAPER MCP debug wrapper starting"));
    assert!(log.contains("Bridge directory exists: false"));
    assert!(log.contains("ERROR: "));
    assert!(log.contains("Trace:"));
    assert!(log.contains("Fatal error: "));
    // Delegation never happened
    assert!(!log.contains("Starting MCP server..."));
}
