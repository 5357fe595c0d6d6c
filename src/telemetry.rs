use crate::error::WorthItError;
use tracing_subscriber::EnvFilter;

/// Filter directive for the CLI verbosity flags, falling back to the
/// configured level when no flag is given.
pub fn level_for(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs a compact stderr subscriber. `RUST_LOG` takes precedence.
pub fn init(level: &str) -> Result<(), WorthItError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            WorthItError::Telemetry(format!("invalid log level/filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| WorthItError::Telemetry(e.to_string()))
}
