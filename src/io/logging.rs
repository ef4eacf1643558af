//! Logging initialization for the command-line tool

/// Default filter when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Initialize the logging system
///
/// Uses `env_logger` with a default filter of `info`, or `warn` when quiet.
/// Override with the `RUST_LOG` environment variable. Calling this more than
/// once keeps the first logger.
pub fn init(quiet: bool) {
    let initialized = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(quiet)),
    )
    .format_timestamp(None)
    .format_target(false)
    .try_init();

    if let Err(err) = initialized {
        log::debug!("Keeping existing logger: {err}");
    }
}
