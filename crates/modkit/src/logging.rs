//! Log setup for the CLI. Logs go to stderr so command output stays parseable.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
