use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Installs the global console subscriber on stderr, leaving stdout for reports.
/// `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let (level, rejected) = match normalize_level(level) {
        Some(level) => (level, None),
        None => ("info", Some(level.to_string())),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse::<Directive>()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    // A subscriber may already be installed by an embedding application
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    if let Some(rejected) = rejected {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", rejected);
    }
}

fn normalize_level(level: &str) -> Option<&'static str> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.iter().copied().find(|l| *l == level)
}
