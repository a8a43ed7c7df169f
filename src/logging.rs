//! File-based logging setup
//!
//! The terminal itself belongs to the TUI, so log records go to a file
//! under the config directory instead of stdout. Level defaults to INFO
//! and can be overridden with the RUST_LOG env var.

use crate::config::Config;
use std::fs::{self, File};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "procjena-tui.log";

/// Initialize logging to the config-directory log file. Call once at
/// startup, before the terminal enters raw mode. Failure to set up the
/// log file is not fatal; the app just runs without logs.
pub fn init() {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let Ok(file) = File::options().create(true).append(true).open(dir.join(LOG_FILE_NAME)) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .try_init();
}
