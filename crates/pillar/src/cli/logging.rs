//! Diagnostic logging setup.
//!
//! Logs go to stderr so that stdout stays clean for reports and `--json` output.

use std::{env, io};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `PILLAR_LOG=debug`.
pub const LOG_ENV: &str = "PILLAR_LOG";

/// Installs the global subscriber.
///
/// A non-empty `PILLAR_LOG` takes precedence; otherwise the level is `warn`, raised by each
/// `-v`.
pub fn init(verbose: u8) {
    let filter = match env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(default_directive(verbose)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        eprintln!("warning: could not initialize logging: {e}");
    }
}

/// Maps the `-v` count to a filter directive.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "debug");
    }
}
