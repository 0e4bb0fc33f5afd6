use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Emit a trace event carrying the time elapsed since `start`.
///
/// ```rust,ignore
/// trace_time!(start, "load_graph", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Environment variable consulted when `RUST_LOG` is unset
pub const LOG_ENV: &str = "WIKIROUTE_LOG";

/// Install the stderr subscriber.
///
/// `log_level` wins over `verbose`; either is replaced by `RUST_LOG` or
/// [`LOG_ENV`] when one of them holds a valid filter.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
    let subscriber = tracing_subscriber::registry().with(env_filter(level));
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    if log_json {
        subscriber
            .with(layer.json().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
            .try_init()?;
    } else {
        subscriber.with(layer.compact().with_target(false)).try_init()?;
    }
    Ok(())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

/// Expand a bare level ("info") into directives for both crates.
fn filter_directives(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("wikiroute={level},wikiroute_core={level}")
    }
}
