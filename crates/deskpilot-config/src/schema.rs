//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub computer: ComputerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8102
}

/// Settle delays used while driving the desktop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputerConfig {
    /// Delay before and after each directly typed character.
    #[serde(default = "default_type_interval_ms")]
    pub type_interval_ms: u64,

    /// Delay around the paste hotkey in the clipboard fallback.
    #[serde(default = "default_clipboard_settle_ms")]
    pub clipboard_settle_ms: u64,

    /// Delay between pointer moves while dragging.
    #[serde(default = "default_drag_interval_ms")]
    pub drag_interval_ms: u64,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: default_type_interval_ms(),
            clipboard_settle_ms: default_clipboard_settle_ms(),
            drag_interval_ms: default_drag_interval_ms(),
        }
    }
}

fn default_type_interval_ms() -> u64 {
    50
}

fn default_clipboard_settle_ms() -> u64 {
    200
}

fn default_drag_interval_ms() -> u64 {
    10
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write daily-rolling log files.
    #[serde(default)]
    pub file: bool,

    /// Directory for log files. Defaults to `~/.deskpilot/logs`.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
            log_dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Resolved log directory.
    pub fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).to_string()),
            None => deskpilot_dir().join("logs"),
        }
    }
}

/// Base directory for deskpilot state (`~/.deskpilot`).
pub fn deskpilot_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".deskpilot")
}
