use anyhow::{anyhow, Result};
use reaper_mcp_debug::server::ServerEntry;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stand-in for the delegated server. Records whether `run` was reached and
/// can be configured to fail, covering both sides of the fault path.
pub struct StubServer {
    bridge_dir: PathBuf,
    comm_mode: String,
    fail_with: Option<String>,
    ran: Arc<AtomicBool>,
}

impl StubServer {
    pub fn new(bridge_dir: &Path) -> Self {
        Self {
            bridge_dir: bridge_dir.to_path_buf(),
            comm_mode: "file".to_string(),
            fail_with: None,
            ran: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn failing(bridge_dir: &Path, message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(bridge_dir)
        }
    }

    /// Shared flag set once `run` is invoked; survives the stub being moved
    /// into the startup sequence.
    pub fn ran_flag(&self) -> Arc<AtomicBool> {
        self.ran.clone()
    }
}

impl ServerEntry for StubServer {
    fn bridge_dir(&self) -> &Path {
        &self.bridge_dir
    }

    fn comm_mode(&self) -> &str {
        &self.comm_mode
    }

    fn run(&self) -> Result<()> {
        self.ran.store(true, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}
