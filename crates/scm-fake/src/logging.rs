use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a tracing subscriber for fixture debug output in tests.
///
/// Events go through the test harness writer, so they show up only for
/// failing tests or with `--nocapture`. The level comes from `RUST_LOG`,
/// defaulting to "info"; `RUST_LOG=scm_fake=debug` shows every fixture call.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Another test may already have installed a subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
