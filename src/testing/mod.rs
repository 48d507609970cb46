#![cfg(test)]
crate::reexport!(fixtures);
crate::reexport!(context);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        let filter = if crate::config().test_logs {
            EnvFilter::new("daogen=trace")
        } else {
            EnvFilter::from_default_env() // <- reads RUST_LOG
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}
