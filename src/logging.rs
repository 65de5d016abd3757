//! Logging system initialization
//!
//! The library itself only emits `tracing` events; a host binary (or a
//! test harness) calls this once to install a console subscriber.

/// Initialize the tracing subscriber with the given filter directive.
///
/// **Note**: call only once during startup; installing a second global
/// subscriber panics.
///
/// # Arguments
/// * `level` - an `EnvFilter` directive, e.g. `"info"` or `"shortmap=debug"`
pub fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::new(level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(true)
        .init();
}
