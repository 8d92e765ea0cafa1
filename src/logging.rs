// Diagnostic logging
//
// Events go to stderr so stdout stays clean for JSON and HTML output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "LLEX_LOG";

/// Filter used when `LLEX_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "llex=info"
    } else {
        "llex=warn"
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
