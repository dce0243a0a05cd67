// src/logging.rs
//! stderr logger setup.
//!
//! Verbosity comes from `-v`; `TEXT_STATS_LOG` (env_logger filter syntax)
//! takes precedence when set.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub const LOG_ENV: &str = "TEXT_STATS_LOG";

/// Install the global logger. Calling it twice is harmless.
pub fn init(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .parse_env(Env::new().filter(LOG_ENV));

    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
