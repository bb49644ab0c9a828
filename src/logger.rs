use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Filter used when `RUST_LOG` is unset: pipeline at info, dependencies quiet.
const DEFAULT_DIRECTIVES: &str = "warn,digit_canvas=info";

pub fn init() {
    init_with(DEFAULT_DIRECTIVES);
}

/// Installs the global subscriber; `RUST_LOG` wins over `default_directives`.
pub fn init_with(default_directives: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events_for(env_filter.max_level_hint()));

    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

/// Stage spans report their close (with busy/idle time) at debug and below.
fn span_events_for(max_level: Option<LevelFilter>) -> FmtSpan {
    match max_level {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}
