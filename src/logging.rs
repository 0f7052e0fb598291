//! Logger setup for the binary

/// Install env_logger on stderr, honouring `RUST_LOG` (default `info`).
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
