use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the command-line tool.
///
/// Logs go to stderr; stdout carries only the report. `RUST_LOG` overrides the
/// default filter.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "splitsettle=debug,info"
    } else {
        "splitsettle=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
