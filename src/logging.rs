use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "swag_longest_answer=info";
const VERBOSE_FILTER: &str = "swag_longest_answer=debug";

/// Filter directive used when `RUST_LOG` is not set.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (log_level, verbose) {
        (Some(level), _) if level.contains('=') => level.to_string(),
        (Some(level), _) => format!("swag_longest_answer={level}"),
        (None, true) => VERBOSE_FILTER.to_string(),
        (None, false) => DEFAULT_FILTER.to_string(),
    }
}

/// Installs a stderr subscriber. Stdout stays free for prediction output.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose, log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

/// Reports a terminal failure exactly once: through tracing when a subscriber
/// is installed, otherwise as a plain line on `fallback`.
pub fn report_failure<W: std::io::Write>(
    err: &dyn std::fmt::Display,
    logging_ready: bool,
    fallback: &mut W,
) {
    if logging_ready {
        tracing::error!(error = %err, "run failed");
    } else {
        let _ = writeln!(fallback, "error: {err}");
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
