use tracing_subscriber::EnvFilter;

/// Targets that receive log output by default.
static DEFAULT_FILTER: &str = "tdt_server=info,tower_http=info";

/// Initialize tracing.
///
/// The `RUST_LOG` env var overrides the default filter if set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
