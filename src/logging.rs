use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::Format};

/// Installs the global subscriber. `RUST_LOG`, when set, takes precedence over
/// `log_level`.
pub fn setup_tracing(log_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(
            Format::default()
                .with_ansi(true)
                .with_level(true)
                .with_target(false)
                .compact(),
        )
        .init();
}
