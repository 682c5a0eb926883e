// profanity/src/logger.rs
//! Logger setup for the `profanity` binary.
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` is honored unless an
//! explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs the global logger. Calling it more than once is harmless.
///
/// `Some(level)` overrides `RUST_LOG` for both the CLI and the core crate;
/// `None` defers to `RUST_LOG`, defaulting to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);

    if let Some(level) = level {
        builder
            .filter_module("profanity", level)
            .filter_module("profanity_core", level);
    }

    let _ = builder.try_init();
}
