//! Logging setup and user-facing message helpers.
//!
//! Library code logs through `tracing`; only the binary installs a subscriber.

use std::fmt::Display;
use tracing::Level;

/// Install the stderr fmt subscriber. `verbosity` counts `-v` flags.
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prefix a message the way every CLI error context is reported.
pub fn error_message(msg: impl Display) -> String {
    format!("openapi-compose: {}", msg)
}

/// Report input the library accepted but had to drop.
pub fn warn(msg: impl Display) {
    tracing::warn!("{}", msg);
}
