//! Windowed host for PixelForge.
//!
//! Opens one window showing either the editor canvas or a running play
//! session, and moves between the two on the keyboard.
//!
//! ```rust,ignore
//! use pixelforge_app::{App, AppConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load_or_default("pixelforge.toml".as_ref())?;
//!     pixelforge_app::logging::init(&config.log_level)?;
//!     let world = config.initial_world()?;
//!     App::new(world).with_config(config).run()
//! }
//! ```

pub mod builder;
pub mod config;
mod graphics;
pub mod logging;
mod runner;

pub use builder::App;
pub use config::{AppConfig, Movement, DEFAULT_CONFIG_PATH};

// ── Re-export the most-used types ──────────────────────────────────────────
pub use pixelforge_core::{Viewport, World};
pub use pixelforge_editor::starter_world;
