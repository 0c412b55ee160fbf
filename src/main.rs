use anyhow::Result;

use reaper_mcp_debug::{config::Config, diag::DiagLog, server, startup, utils};

fn main() {
    // Initialize logging to stderr
    utils::logging::init_logging();

    if let Err(e) = run() {
        tracing::error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let log = DiagLog::new(config.log_path.clone());

    utils::logging::log_startup(&config);

    // Delegates to reaper-mcp-server; blocks for the life of the process
    // unless startup faults.
    let result = startup::run(&log, &config, || server::locate(&config));
    if let Err(e) = &result {
        let _ = log.append(&format!("Fatal error: {:#}", e));
    }
    result
}
