//! Configuration for the folio terminal portfolio.
//!
//! Settings are read from `config.toml` in the platform configuration
//! directory. Every field has a default, so a partial file (or no file at
//! all) is valid.

mod profile;

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use folio_core::{FieldParams, MotionPreference, Rgb};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use profile::{Link, Profile, Project, Stat};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Particle background parameters.
    pub particles: FieldParams,
    /// Frame rate, cell geometry and palette.
    pub display: DisplayConfig,
    /// Accessibility preferences.
    pub accessibility: AccessibilityConfig,
    /// Optional decorative effects.
    pub effects: EffectsConfig,
    /// Log output.
    pub logging: LoggingConfig,
    /// Page content.
    pub profile: Profile,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Width of one terminal cell in page pixels.
    pub cell_width: u32,
    /// Height of one terminal cell in page pixels.
    pub cell_height: u32,
    /// Page background, used to blend translucent particles.
    pub background: Rgb,
    /// Primary accent (links, active nav item).
    pub accent: Rgb,
    /// Secondary accent (headings).
    pub secondary: Rgb,
    /// Highlight for hovered elements.
    pub highlight: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            cell_width: 8,
            cell_height: 16,
            background: Rgb::new(10, 10, 20),
            accent: Rgb::new(102, 126, 234),
            secondary: Rgb::new(240, 147, 251),
            highlight: Rgb::new(0, 245, 255),
        }
    }
}

/// Accessibility settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Reduce animated transitions.
    pub motion: MotionPreference,
}

/// Optional effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Type the tagline out character by character.
    pub typewriter: bool,
    /// Delay between typed characters.
    pub typewriter_speed_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typewriter: false,
            typewriter_speed_ms: 50,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Log file; defaults to `folio.log` in the data directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "folio", "folio")
}

/// Default location of the configuration file.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for runtime data such as the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Clamp values that would make rendering degenerate.
    fn sanitized(mut self) -> Self {
        self.display.fps = self.display.fps.clamp(1, 240);
        self.display.cell_width = self.display.cell_width.max(1);
        self.display.cell_height = self.display.cell_height.max(1);
        self.particles.max_speed = self.particles.max_speed.abs();
        self
    }

    /// Delay between frames.
    pub fn frame_interval_ms(&self) -> u64 {
        (1000 / self.display.fps.max(1)) as u64
    }
}
