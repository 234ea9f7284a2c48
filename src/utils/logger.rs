use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compact human-readable output on stderr; stdout is reserved for the JSON response.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// One flat JSON object per event so CloudWatch Logs Insights can query fields
/// such as `pending` or `task_arns` directly. Lambda stamps each line itself.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .flatten_event(true)
                .with_current_span(false),
        )
        .init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "queue_trigger=debug,info"
    } else {
        "queue_trigger=info,warn"
    }
}
