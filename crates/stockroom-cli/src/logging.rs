//! Tracing subscriber setup.
//!
//! Console commands log to stderr. The interactive screen owns the
//! terminal, so it logs to a file instead.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use stockroom_runtime::LogConfig;
use tracing_subscriber::filter::LevelFilter;

use crate::args::LogLevel;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `--log-level` wins over `log.level` in the config file
pub fn resolve_level(flag: Option<LogLevel>, config: &LogConfig) -> Result<LevelFilter> {
    if let Some(level) = flag {
        return Ok(level.into());
    }

    match config.level.as_deref() {
        Some(text) => text.parse::<LevelFilter>().map_err(|_| {
            anyhow!(
                "log.level must be one of error, warn, info, debug, trace; got {:?}",
                text
            )
        }),
        None => Ok(DEFAULT_LEVEL),
    }
}

pub fn init(level: LevelFilter, target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
