//! Tracing subscriber setup.
//!
//! Outside debug mode nothing is installed and the `msg_*!` macros print
//! plain text. With `TIMETRACE_DEBUG` or `RUST_LOG` set, a `fmt` subscriber
//! writes to stderr; `RUST_LOG` selects the level, `timetrace=debug` is the
//! fallback.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "timetrace=debug";

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A subscriber may already be installed when embedded, e.g. in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
