use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Wires the global subscriber. Our own events are gated by `verbose`,
/// everything else stays opt-in through `RUST_LOG`.
pub fn init_logging(verbose: bool) {
    let own_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let fallback = if verbose { "debug" } else { "off" };

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(Targets::new().with_target(env!("CARGO_PKG_NAME"), own_level))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .init();
}
