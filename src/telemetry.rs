use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,mongodb=warn"));

    // Single-binary service: targets add no routing value, and the log
    // stream is consumed by collectors, not a terminal.
    let fmt_layer = fmt::layer().with_target(false).with_ansi(false).json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
