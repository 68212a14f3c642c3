//! Helpers shared by unit tests.

/// Routes `tracing` events to the test harness output.
///
/// Run with `RUST_LOG=slicekit_core=trace` to see why a slice was rejected.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
