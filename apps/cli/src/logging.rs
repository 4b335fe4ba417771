//! Logging initialization for the console binary
//!
//! Uses `RUST_LOG` when set; otherwise logs this binary at `info` (or `debug`
//! with `--verbose`) and the value library at `warn`. Logs go to stderr so
//! they never interleave with rendered values on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("rexp={},rengine_rexp=warn", level))
    })
}

pub fn init_logging(verbose: bool) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(console_layer)
        .init();
}
