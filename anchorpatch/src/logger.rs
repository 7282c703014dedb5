//! Logger setup for the anchorpatch binary.
//!
//! Logs go to stderr so stdout stays reserved for diffs, listings and the
//! final `Done`.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes `env_logger`.
///
/// `RUST_LOG` decides the level unless `level_override` is given; with
/// neither, only warnings and errors are shown. Calling this twice is a no-op.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    let _ = builder.try_init();
}
