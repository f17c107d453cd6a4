use hostinfo_domain::config::LogFormat;
use hostinfo_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_ascii_lowercase()));

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .init(),
    }

    info!(
        level = %config.logging.level,
        format = %config.logging.format,
        "Logging initialized"
    );
}
