use doppler_domain::{DopplerError, LoggingConfig};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level`; an unparsable directive falls back
/// to `info`. Returns `false` when a subscriber was already installed, which
/// is expected when several contexts share a process.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|err| {
            warn!(level = %config.level, error = %err, "invalid log filter, using info");
            EnvFilter::new("info")
        });

    let result = if config.json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "tracing already initialised");
            false
        }
    }
}

/// Convert a `DopplerError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DopplerError) -> &'static str {
    match error {
        DopplerError::Config(_) => "config",
        DopplerError::Network(_) => "network",
    }
}
