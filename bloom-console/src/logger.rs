//! Logging setup
//!
//! Log lines go to stderr so table output on stdout stays clean.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "bloom=info,bloom_client=info";

/// Initialize the logger; `RUST_LOG` overrides the default filter
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("bloom=debug,bloom_client=debug,shared=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
