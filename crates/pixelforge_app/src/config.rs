//! Host configuration, read from an optional TOML file.
//!
//! Every field has a default, so an empty or missing file is valid:
//!
//! ```toml
//! title = "PixelForge"
//! width = 1024
//! height = 576
//! vsync = true
//! log_level = "info"
//! world = "worlds/adventure.json"
//! movement = "per-tick"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pixelforge_core::World;
use pixelforge_editor::starter_world;
use pixelforge_engine::MovementPolicy;
use serde::{Deserialize, Serialize};

/// Used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "pixelforge.toml";

/// How controller speed is interpreted in play mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Movement {
    #[default]
    PerTick,
    PerSecond,
}

impl From<Movement> for MovementPolicy {
    fn from(m: Movement) -> Self {
        match m {
            Movement::PerTick => MovementPolicy::PerTick,
            Movement::PerSecond => MovementPolicy::PerSecond,
        }
    }
}

/// Window and engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Canvas width in pixels; also the play-mode viewport.
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// World snapshot loaded at startup and written on save.
    pub world: Option<PathBuf>,
    pub movement: Movement,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PixelForge".to_string(),
            width: 1024,
            height: 576,
            vsync: true,
            log_level: "info".to_string(),
            world: None,
            movement: Movement::PerTick,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse PixelForge config TOML")
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("load {}", path.display()))
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn with_world(mut self, path: impl Into<PathBuf>) -> Self {
        self.world = Some(path.into());
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// The world the editor opens with: the configured snapshot if it
    /// exists, the starter world otherwise.
    pub fn initial_world(&self) -> Result<World> {
        let Some(path) = &self.world else {
            return Ok(starter_world());
        };
        if !path.is_file() {
            log::warn!("{} not found; starting from the starter world", path.display());
            return Ok(starter_world());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let world = World::from_json(&json)
            .with_context(|| format!("load world snapshot {}", path.display()))?;
        log::info!("loaded `{}` from {}", world.name, path.display());
        Ok(world)
    }
}
