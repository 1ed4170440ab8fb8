// src/logger.rs
use env_logger::{Builder, Env};

/// Timestamped, leveled lines on stderr. `RUST_LOG` overrides `verbosity`.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // A second init (tests, embedding) keeps the first logger.
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}
