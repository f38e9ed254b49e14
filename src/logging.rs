//! Log filter selection

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when it parses, else the configured level
///
/// `verbose` adds a `debug` directive on top of either.
pub fn log_filter(verbose: bool, default_level: &str, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}
