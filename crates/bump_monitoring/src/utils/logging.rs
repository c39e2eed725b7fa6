use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{BumpMonitoringError, BumpMonitoringResult};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging to stderr
///
/// Progress lines are logged at `info`, so output is on by default.
///
/// # Environment Variables
/// - `RUST_LOG`: Overrides the default `info` filter (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized
/// - `Err(BumpMonitoringError::LoggingInitialization)` if a subscriber is already set
pub fn init_logging() -> BumpMonitoringResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| BumpMonitoringError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A second initialization reports the conflict instead of panicking
    #[test]
    fn test_init_logging_twice() {
        let _ = init_logging();
        let second = init_logging();

        assert!(matches!(
            second,
            Err(BumpMonitoringError::LoggingInitialization(_))
        ));
    }
}
