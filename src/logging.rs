//! Tracing initialization.
//!
//! Diagnostics go to stderr so stdout carries only command results (written
//! paths, preset listings).

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `DEITYGEN_LOG=deitygen=trace`.
pub const LOG_ENV: &str = "DEITYGEN_LOG";

/// Default filter for the given verbosity flags.
///
/// `-q` wins over `-v`.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `DEITYGEN_LOG` takes precedence over the flags. Calling this more than once
/// is harmless; later calls leave the first subscriber in place.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0, false), "info");
        assert_eq!(default_directive(1, false), "debug");
        assert_eq!(default_directive(2, false), "trace");
        assert_eq!(default_directive(7, false), "trace");
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(default_directive(0, true), "warn");
        assert_eq!(default_directive(2, true), "warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0, true);
        init(2, false);
    }
}
