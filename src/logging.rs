//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. `GITSHIP_LOG` takes an
//! `EnvFilter` directive (e.g. `debug` or `gitship=trace`); without it the
//! level follows the number of `-v` flags.

use crate::exec::ProcessEnv;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "GITSHIP_LOG";

/// Default filter directive for a given `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn filter_for(env: &ProcessEnv, verbose: u8) -> EnvFilter {
    env.get(LOG_ENV_VAR)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(env: &ProcessEnv, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(env, verbose))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
