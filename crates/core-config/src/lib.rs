//! Configuration loading and parsing.
//!
//! Parses `kestrel.toml` (or an override path provided by the binary). Every
//! table and field is optional; missing values take their defaults. The
//! parsed values are kept in `Config::file` and the values the editor should
//! actually use are computed by `Config::apply_context` once the terminal size
//! is known.
//!
//! Unknown fields are ignored so older binaries accept newer files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "kestrel.toml";

/// Terminal geometry the effective values are clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    pub columns: u16,
    pub rows: u16,
}

impl ConfigContext {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    #[serde(default = "ScrollConfig::default_horizontal_margin")]
    pub horizontal_margin: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            horizontal_margin: Self::default_horizontal_margin(),
        }
    }
}

impl ScrollConfig {
    const fn default_horizontal_margin() -> u16 {
        3
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: Self::default_message_timeout_ms(),
        }
    }
}

impl StatusConfig {
    const fn default_message_timeout_ms() -> u64 {
        5000
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct QuitConfig {
    #[serde(default = "QuitConfig::default_confirmations")]
    pub confirmations: u32,
}

impl Default for QuitConfig {
    fn default() -> Self {
        Self {
            confirmations: Self::default_confirmations(),
        }
    }
}

impl QuitConfig {
    const fn default_confirmations() -> u32 {
        2
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub quit: QuitConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: ConfigFile,
    pub effective_horizontal_margin: u16,
    pub effective_quit_confirmations: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

/// Config path: `./kestrel.toml` when present, else the platform config dir
/// (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kestrel").join(CONFIG_FILE_NAME);
    }
    local
}

/// Load configuration from `path` (or the discovered location).
///
/// A missing file or a parse error yields defaults; only an unreadable
/// existing file is reported as an error.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("reading config {}", path.display()));
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config::from_file(file))
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(file: ConfigFile) -> Self {
        let effective_horizontal_margin = file.scroll.horizontal_margin;
        let effective_quit_confirmations = file.quit.confirmations.max(1);
        Self {
            file,
            effective_horizontal_margin,
            effective_quit_confirmations,
        }
    }

    /// Clamp the configured values against the terminal size. Returns the
    /// effective horizontal margin.
    pub fn apply_context(&mut self, ctx: ConfigContext) -> u16 {
        let raw = self.file.scroll.horizontal_margin;
        let max = ctx.columns.saturating_sub(1) / 2;
        let clamped = raw.min(max);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                max,
                columns = ctx.columns,
                rows = ctx.rows,
                "scroll_margin_horizontal_clamped"
            );
        }
        self.effective_horizontal_margin = clamped;

        let confirmations = self.file.quit.confirmations;
        if confirmations == 0 {
            info!(target: "config", raw = confirmations, clamped = 1, "quit_confirmations_clamped");
        }
        self.effective_quit_confirmations = confirmations.max(1);
        clamped
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.file.status.message_timeout_ms)
    }
}
