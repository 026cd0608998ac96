use std::io;
use tracing_subscriber::fmt::{
    self,
    format::{DefaultFields, Format},
    SubscriberBuilder,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

type Builder = SubscriberBuilder<DefaultFields, Format, EnvFilter, fn() -> io::Stdout>;

/// Filter from `RUST_LOG`, falling back to `DEFAULT_FILTER`, writing to stdout.
fn builder(with_target: bool) -> Builder {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(with_target)
        .with_writer(io::stdout as fn() -> io::Stdout)
}

/// Initialize tracing subscriber with compact human-readable output.
pub fn init_logging_default() {
    let _ = builder(false).compact().try_init();
}

/// Initialize tracing subscriber with JSON structured output. Keeps the
/// target so `service::visit` events can be told apart from request spans.
pub fn init_logging_json() {
    let _ = builder(true).json().try_init();
}
