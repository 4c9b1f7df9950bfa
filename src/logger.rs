//! Logging setup.
//!
//! Messages go through the `log` macros. `init` installs a `fern` dispatcher
//! that prints to stderr at the configured level and, when file logging is
//! enabled, also appends everything at debug level to a log file.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::Path;
use std::str::FromStr;

use crate::config::LoggingConfig;

/// Log target of the `tasks` binary.
const BIN_TARGET: &str = "tasks";

/// Install the global logger. `verbose` raises the stderr level to info.
pub fn init(config: &LoggingConfig, log_file: Option<&Path>, verbose: bool) -> Result<()> {
    dispatch(config, log_file, verbose)?
        .apply()
        .context("Logger already initialized")?;
    Ok(())
}

/// Build the dispatcher [`init`] installs. Other crates log at warn and
/// above; this crate and the binary log down to the sink levels.
pub fn dispatch(config: &LoggingConfig, log_file: Option<&Path>, verbose: bool) -> Result<fern::Dispatch> {
    let mut stderr_level = LevelFilter::from_str(&config.level)
        .with_context(|| format!("Invalid logging.level '{}'", config.level))?;
    if verbose && stderr_level < LevelFilter::Info {
        stderr_level = LevelFilter::Info;
    }

    let stderr = fern::Dispatch::new().level(stderr_level).chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for(env!("CARGO_CRATE_NAME"), LevelFilter::Trace)
        .level_for(BIN_TARGET, LevelFilter::Trace)
        .chain(stderr);

    if config.enabled {
        if let Some(path) = log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(fern::Dispatch::new().level(LevelFilter::Debug).chain(file));
        }
    }

    Ok(dispatch)
}
