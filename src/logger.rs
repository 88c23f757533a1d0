//! Activity logging.
//!
//! Two layers work together here. [`Logger`] keeps a bounded, timestamped
//! in-memory history that the UI shows in its activity overlay. Every line is
//! also forwarded to the `log` facade, which `fern` writes to a file when
//! logging is enabled in the configuration.

use crate::constants::{APP_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    enabled: bool,
}

impl Logger {
    /// In-memory logger without file output
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
            enabled: false,
        }
    }

    /// Build a logger from the `[logging]` config section.
    ///
    /// When enabled, installs a `fern` dispatcher writing to [`Logger::get_log_file_path`].
    /// The dispatcher is process-wide and installed at most once.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            init_file_logging()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
            enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether records are currently going to a log file
    pub fn has_file_writer(&self) -> bool {
        self.enabled && FILE_LOGGING.get().is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: "activity", "{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the diagnostic log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn init_file_logging() -> Result<()> {
    FILE_LOGGING
        .get_or_try_init(|| {
            let path = Logger::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            let file =
                fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Debug)
                .chain(file)
                .apply()
                .context("Failed to install file logger")?;

            Ok::<PathBuf, anyhow::Error>(path)
        })
        .map(|_| ())
}
