use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variables the wrapper records, in logging order.
pub const TRACKED_VARS: [&str; 4] = [
    "REAPER_BRIDGE_DIR",
    "REAPER_COMM_MODE",
    "REAPER_HOST",
    "REAPER_PORT",
];

/// Placeholder logged for a variable that is absent from the environment.
pub const NOT_SET: &str = "<not set>";

/// Default bridge directory, relative to the home directory.
const DEFAULT_BRIDGE_DIR: &str = "Library/Application Support/REAPER/Scripts/mcp_bridge_data";

/// Log file name under the home directory.
const LOG_FILE_NAME: &str = "reaper_mcp_debug.log";

/// Ordered snapshot of the tracked environment variables, captured once at
/// startup so the logged values and the resolved paths agree.
#[derive(Debug, Clone)]
pub struct EnvReport {
    vars: Vec<(String, Option<String>)>,
}

impl EnvReport {
    pub fn capture(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let vars = TRACKED_VARS
            .iter()
            .map(|&name| (name.to_string(), lookup(name)))
            .collect();
        Self { vars }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref().unwrap_or(NOT_SET)))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the diagnostic log is written.
    pub log_path: PathBuf,
    /// Resolved bridge directory (env override or home default).
    pub bridge_dir: PathBuf,
    /// Snapshot of the tracked environment variables.
    pub env: EnvReport,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let home = env::var("HOME")
            .map(PathBuf::from)
            .context("HOME environment variable not set")?;

        Ok(Self::resolve(&home, |key| env::var(key).ok()))
    }

    /// Pure resolution step, separated from the process environment so tests
    /// can supply their own lookup and home directory.
    pub fn resolve(home: &PathBuf, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = EnvReport::capture(&lookup);
        let bridge_dir = env
            .get("REAPER_BRIDGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(DEFAULT_BRIDGE_DIR));

        Self {
            log_path: home.join(LOG_FILE_NAME),
            bridge_dir,
            env,
        }
    }
}
