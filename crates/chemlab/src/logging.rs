//! Log filter setup.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, blank, or unparsable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(spec: Option<&str>) -> EnvFilter {
    spec.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
