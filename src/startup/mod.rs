use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::diag::DiagLog;
use crate::server::ServerEntry;

/// Run the startup sequence: record runtime context, environment and bridge
/// directory state, then locate the delegated server and hand control to it.
/// The delegated run is expected to block for the life of the process, so
/// this function normally never returns.
///
/// Any fault from the environment report onward is logged with its full
/// trace and propagated unchanged to the caller.
pub fn run<S, F>(log: &DiagLog, config: &Config, locate: F) -> Result<()>
where
    S: ServerEntry,
    F: FnOnce() -> Result<S>,
{
    log.separator()?;
    log.append("REAPER MCP debug wrapper starting")?;

    let exe = env::current_exe().context("cannot determine wrapper executable path")?;
    log.append(&format!("Executable: {}", exe.display()))?;
    log.append(&format!("Wrapper version: {}", env!("CARGO_PKG_VERSION")))?;

    let cwd = env::current_dir().context("cannot determine working directory")?;
    log.append(&format!("Working directory: {}", cwd.display()))?;
    if let Some(dir) = exe.parent() {
        log.append(&format!("Executable directory: {}", dir.display()))?;
    }

    log.checked(|| {
        log.append("Environment variables:")?;
        for (name, value) in config.env.iter() {
            log.append(&format!("  {}={}", name, value))?;
        }

        log.append(&format!("Bridge directory: {}", config.bridge_dir.display()))?;
        let exists = config.bridge_dir.exists();
        log.append(&format!("Bridge directory exists: {}", exists))?;
        if exists {
            let entries = list_dir(&config.bridge_dir)?;
            log.append(&format!("Bridge directory contents: {:?}", entries))?;
        }

        log.append("Locating reaper-mcp-server...")?;
        let server = locate()?;
        log.append(&format!("Server BRIDGE_DIR: {}", server.bridge_dir().display()))?;
        log.append(&format!("Server COMM_MODE: {}", server.comm_mode()))?;

        log.append("Starting MCP server...")?;
        server.run()
    })
}

/// Immediate entry names of a directory, in the order the filesystem
/// returns them.
fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
