//! Logging setup. The subscriber is installed once by the binary; components receive a
//! [`Span`] explicitly instead of reaching for a process-wide logger.

use tracing::Span;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "person_service=info,person_server=info,tower_http=info";

/// Install the fmt subscriber. Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

/// Parent span for the request-serving side.
pub fn service_span() -> Span {
    tracing::info_span!("person_service")
}

/// Parent span for startup seeding.
pub fn seed_span() -> Span {
    tracing::info_span!("seed_loader")
}
