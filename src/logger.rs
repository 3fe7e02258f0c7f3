//! Diagnostic logging for the `githooks` binary.
//!
//! Library code only emits `log` records; the binary decides where they go.

use std::io::Write;

use env_logger::Env;
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `GITHOOKS_LOG=debug`.
pub const LOG_ENV: &str = "GITHOOKS_LOG";

/// Initializes logging to stderr.
///
/// `GITHOOKS_LOG` wins when set. Otherwise `verbose` selects `debug`, and the
/// default is `warn`.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });

    // a second initialization (tests driving `run_from` repeatedly) is harmless
    let _ = builder.try_init();
}
