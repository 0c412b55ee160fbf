use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::config::Config;

/// Name of the delegated server executable, expected next to the wrapper.
const SERVER_PROGRAM: &str = "reaper-mcp-server";

/// The delegated server entry point. The wrapper only needs two readable
/// configuration values and a blocking run call; everything else about the
/// server is out of scope here.
pub trait ServerEntry {
    fn bridge_dir(&self) -> &Path;
    fn comm_mode(&self) -> &str;

    /// Start the server. Expected to block for the life of the process and
    /// never return under normal operation.
    fn run(&self) -> Result<()>;
}

/// Default entry point: the real `reaper-mcp-server` executable, run as a
/// child process that takes over stdin/stdout for the MCP protocol.
#[derive(Debug)]
pub struct ProcessServer {
    program: PathBuf,
    bridge_dir: PathBuf,
    comm_mode: String,
}

impl ProcessServer {
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ServerEntry for ProcessServer {
    fn bridge_dir(&self) -> &Path {
        &self.bridge_dir
    }

    fn comm_mode(&self) -> &str {
        &self.comm_mode
    }

    fn run(&self) -> Result<()> {
        info!(program = %self.program.display(), "handing control to reaper-mcp-server");

        let status = Command::new(&self.program)
            .env("REAPER_BRIDGE_DIR", &self.bridge_dir)
            .env("REAPER_COMM_MODE", &self.comm_mode)
            .status()
            .with_context(|| format!("failed to start {}", self.program.display()))?;

        if !status.success() {
            bail!("reaper-mcp-server exited with {}", status);
        }
        Ok(())
    }
}

/// Resolve the server executable next to the wrapper binary, along with the
/// configuration values it will run under. A missing executable surfaces
/// here, before any attempt to start it.
pub fn locate(config: &Config) -> Result<ProcessServer> {
    let exe = env::current_exe().context("cannot determine wrapper executable path")?;
    let dir = exe
        .parent()
        .context("wrapper executable has no parent directory")?;

    locate_in(dir, config)
}

pub fn locate_in(dir: &Path, config: &Config) -> Result<ProcessServer> {
    let program = dir.join(SERVER_PROGRAM);
    if !program.exists() {
        bail!("{} not found at {}", SERVER_PROGRAM, program.display());
    }

    Ok(ProcessServer {
        program,
        bridge_dir: config.bridge_dir.clone(),
        comm_mode: config
            .env
            .get("REAPER_COMM_MODE")
            .unwrap_or("file")
            .to_string(),
    })
}
