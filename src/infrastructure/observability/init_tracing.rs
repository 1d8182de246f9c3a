use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use super::TracingConfig;

const DEFAULT_FILTER: &str = "info,tawau=debug,tower_http=debug";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// filter when set.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init();
    } else {
        // Local shells get human-readable output with source locations.
        registry
            .with(fmt::layer().with_target(true).with_file(true).with_line_number(true))
            .init();
    }

    tracing::info!(
        port,
        environment = %config.environment,
        json = config.json_format,
        "tracing initialized"
    );
}
