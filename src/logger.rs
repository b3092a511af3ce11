//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, before the bootstrap sequence runs, so the
//! debugger-gate markers and phase transitions are visible from the first
//! step. `RUST_LOG` takes precedence over the supplied default level.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// `default_level` accepts standard level strings: `"error"`, `"warn"`,
/// `"info"`, `"debug"`, `"trace"`. It is only used when `RUST_LOG` is unset
/// or unparsable.
pub fn init(default_level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logger(format!("invalid log level '{default_level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_info_succeeds_or_already_init() {
        // May already be set by a prior test in the same process — both outcomes are fine.
        match init("info") {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn invalid_default_level_errors_when_env_unset() {
        // Only meaningful when RUST_LOG is absent; skip otherwise.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(init("webview_shell=notalevel").is_err());
    }
}
