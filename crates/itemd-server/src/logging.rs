// ABOUTME: Tracing subscriber setup shared by the itemd binary and the log-capturing tests.
// ABOUTME: Lines read "<timestamp> <LEVEL> <message>"; the event target is left out.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Filter used when RUST_LOG is unset or unparsable.
pub const DEFAULT_FILTER: &str = "itemd=info,itemd_server=info,tower_http=info";

/// The fmt builder every itemd subscriber starts from.
pub fn fmt_builder() -> SubscriberBuilder {
    tracing_subscriber::fmt().with_target(false)
}

/// Install the global subscriber, honouring RUST_LOG.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt_builder().with_env_filter(filter).init();
}
