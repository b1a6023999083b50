//! Configuration management for coursebuilder
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_ACCEPTED_EXTENSIONS, DEFAULT_COURSE_TITLE, SCROLL_LOOKAHEAD_DEFAULT, SCROLL_LOOKAHEAD_MAX,
    SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title shown in the course header
    pub course_title: String,
    /// Outline sidebar width in columns
    pub sidebar_width: u16,
    /// Enable mouse support (clicks, wheel, drag-and-drop)
    pub mouse_enabled: bool,
    /// Rows past the viewport top at which a module header counts as reached
    pub scroll_lookahead: usize,
    /// Icon theme: ascii, unicode or emoji
    pub icon_theme: IconTheme,
    /// Whether new modules start expanded
    pub start_expanded: bool,
}

/// File handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Extensions suggested by the upload dialog (advisory, never enforced)
    pub accepted_extensions: Vec<String>,
    /// Where downloads are saved; defaults to the platform download directory
    pub download_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            course_title: DEFAULT_COURSE_TITLE.to_string(),
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            mouse_enabled: true,
            scroll_lookahead: SCROLL_LOOKAHEAD_DEFAULT,
            icon_theme: IconTheme::default(),
            start_expanded: true,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            download_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl FilesConfig {
    /// Configured download directory, else the platform one, else the working directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Whether `path` has one of the suggested extensions (case-insensitive).
    pub fn is_suggested(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.accepted_extensions
                    .iter()
                    .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("coursebuilder.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("coursebuilder").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.scroll_lookahead > SCROLL_LOOKAHEAD_MAX {
            anyhow::bail!(
                "scroll_lookahead cannot exceed {} rows, got {}",
                SCROLL_LOOKAHEAD_MAX,
                self.ui.scroll_lookahead
            );
        }

        if self.ui.course_title.trim().is_empty() {
            anyhow::bail!("course_title cannot be empty");
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        if let Some(ext) = self.files.accepted_extensions.iter().find(|ext| ext.trim().is_empty()) {
            anyhow::bail!("accepted_extensions contains an empty entry: '{}'", ext);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# coursebuilder Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("coursebuilder"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
