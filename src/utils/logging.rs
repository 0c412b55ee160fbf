use std::env;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Config;

pub fn init_logging() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Always write to stderr: once the wrapper delegates, stdout belongs to
    // the MCP server's protocol stream.
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false)
        .with_writer(std::io::stderr);

    let json_logs = env::var("JSON_LOGS")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}

pub fn log_startup(config: &Config) {
    info!(
        bridge_dir = %config.bridge_dir.display(),
        debug_log = %config.log_path.display(),
        "REAPER MCP debug wrapper starting"
    );
}
