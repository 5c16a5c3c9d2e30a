use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide subscriber.
///
/// JSON lines by default; `SCOREBOOK_LOG_FORMAT=pretty` switches to the
/// human-readable formatter for local runs.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sqlx=warn,sea_orm=warn"));

    let pretty = std::env::var("SCOREBOOK_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let base = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if pretty {
        registry.with(base.with_ansi(true)).try_init()
    } else {
        registry
            .with(base.with_ansi(false).with_file(false).with_line_number(false).json())
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
