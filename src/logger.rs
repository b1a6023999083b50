//! Logging setup.
//!
//! All code logs through the `log` facade. At startup a `fern` dispatch is
//! installed that feeds an in-memory buffer (shown in the logs dialog) and,
//! when enabled in the configuration, a log file in the platform data dir.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_LINES;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

static LOG_BUFFER: Lazy<Mutex<VecDeque<String>>> = Lazy::new(|| Mutex::new(VecDeque::new()));

/// Handle over the process-wide log sinks.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Build a logger from configuration; nothing is installed yet.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config
            .level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level: {}", config.level))?;
        let log_file = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };
        Ok(Self { level, log_file })
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Override the level, e.g. from the `--debug` flag.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// The dispatch tree: memory buffer always, log file when enabled.
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let memory = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    message
                ))
            })
            .chain(fern::Output::call(|record| push_line(record.args().to_string())));

        let mut dispatch = fern::Dispatch::new()
            .level(self.level)
            .level_for("mio", LevelFilter::Warn)
            .chain(memory);

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} [{}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Install as the global logger. Fails if one is already installed.
    pub fn install(self) -> Result<Self> {
        self.dispatch()?
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        log::info!("Logger: installed at level {}", self.level);
        Ok(self)
    }

    /// Buffered log lines, newest first.
    pub fn get_logs() -> Vec<String> {
        LOG_BUFFER
            .lock()
            .map(|logs| logs.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear() {
        if let Ok(mut logs) = LOG_BUFFER.lock() {
            logs.clear();
        }
    }

    /// `<data dir>/coursebuilder/coursebuilder.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("coursebuilder").join("coursebuilder.log"))
    }
}

/// Append a formatted line to the in-memory buffer, dropping the oldest past the cap.
pub fn push_line(line: String) {
    if let Ok(mut logs) = LOG_BUFFER.lock() {
        logs.push_back(line);
        while logs.len() > MAX_LOG_LINES {
            logs.pop_front();
        }
    }
}
