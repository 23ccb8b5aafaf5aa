//! Tracing setup shared by embedders of the assistant.

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` (from `[general]` config)
/// is used as the filter directive. Calling this twice is an error from the
/// subscriber's side, so embedders should call it once at startup.
pub fn init(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}
