//! Logging setup.
//!
//! Events go to stderr through `tracing-subscriber` so stdout stays clean for
//! command output (including `--json`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive; wins over everything else
pub const LOG_ENV: &str = "PHASEBOARD_LOG";

/// Pick the filter directive: PHASEBOARD_LOG, then `-v` count, then the
/// config's `[log] level`, then `warn`.
pub fn filter_directive(env: Option<&str>, verbose: u8, configured: Option<&str>) -> String {
    if let Some(env) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8, configured: Option<&str>) {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
