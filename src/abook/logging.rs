//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with the
//! command output on stdout. The default filter only shows warnings; `RUST_LOG`
//! takes precedence over everything.

use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "abook=warn";
const VERBOSE_FILTER: &str = "abook=debug";

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_filter(false), "abook=warn");
        assert_eq!(default_filter(true), "abook=debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
