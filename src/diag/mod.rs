use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only diagnostic log. Every entry is one timestamped line; each
/// write is an independent open/write/close cycle so the log survives a
/// crash at any point of the startup sequence.
pub struct DiagLog {
    path: PathBuf,
}

impl DiagLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `[<ISO-8601 timestamp>] <message>` as a single line.
    pub fn append(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().to_rfc3339();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open debug log {}", self.path.display()))?;
        writeln!(file, "[{}] {}", timestamp, message)
            .with_context(|| format!("failed to write to debug log {}", self.path.display()))?;
        Ok(())
    }

    /// Visual separator between wrapper runs.
    pub fn separator(&self) -> Result<()> {
        self.append(&"=".repeat(60))
    }

    /// Run a fallible step, logging any failure (message chain plus full
    /// trace) before handing the original error back to the caller.
    pub fn checked<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        match f() {
            Ok(value) => Ok(value),
            Err(e) => {
                self.append(&format!("ERROR: {:#}", e))?;
                self.append(&format!("Trace:\n{:?}", e))?;
                Err(e)
            }
        }
    }
}
