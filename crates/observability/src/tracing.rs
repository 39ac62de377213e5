//! Tracing/logging initialization.

use tracing_subscriber::{
    EnvFilter,
    fmt::{
        SubscriberBuilder,
        format::{DefaultFields, Format},
    },
};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Filter used by the test subscriber when `RUST_LOG` is unset or unparsable.
pub const TEST_FILTER: &str = "warn";

/// Directives from `raw` when they parse, `fallback` otherwise.
fn filter_from(raw: Option<&str>, fallback: &str) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Subscriber builder shared by the service and test subscribers, filtered by
/// `RUST_LOG`.
fn builder(fallback: &str) -> SubscriberBuilder<DefaultFields, Format, EnvFilter> {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt().with_env_filter(filter_from(raw.as_deref(), fallback))
}

/// Initialize tracing/logging for the process: one JSON object per event.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = builder(DEFAULT_FILTER)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize a human-readable subscriber writing through the test harness.
///
/// Intended for integration tests; also idempotent.
pub fn init_for_tests() {
    let _ = builder(TEST_FILTER).with_test_writer().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_when_unset_or_unparsable() {
        assert_eq!(filter_from(None, TEST_FILTER).to_string(), "warn");
        assert_eq!(filter_from(Some("catalog=notalevel"), TEST_FILTER).to_string(), "warn");
    }

    #[test]
    fn filter_prefers_parsable_directives() {
        assert_eq!(filter_from(Some("debug"), TEST_FILTER).to_string(), "debug");
    }

    #[test]
    fn init_for_tests_is_idempotent() {
        init_for_tests();
        init_for_tests();
        tracing::warn!("still logging after a second init");
    }
}
