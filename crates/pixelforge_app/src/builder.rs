use anyhow::Result;
use pixelforge_core::World;

use crate::config::AppConfig;

/// The main entry point.  Uses the builder pattern to configure the host.
///
/// ```rust,ignore
/// App::new(starter_world())
///     .with_title("PixelForge")
///     .with_size(1024, 576)
///     .run()?;
/// ```
pub struct App {
    config: AppConfig,
    world: World,
}

impl App {
    /// Host editing `world`.
    pub fn new(world: World) -> Self {
        Self {
            config: AppConfig::default(),
            world,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config = self.config.with_title(title);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config = self.config.with_size(width, height);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config = self.config.with_vsync(vsync);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Open the window and run until it closes.
    pub fn run(self) -> Result<()> {
        crate::runner::run_internal(self.config, self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_forwards_to_config() {
        let app = App::new(World::new("w", "W", "me"))
            .with_title("Demo")
            .with_size(320, 200)
            .with_vsync(false);
        assert_eq!(app.config().title, "Demo");
        assert_eq!((app.config().width, app.config().height), (320, 200));
        assert!(!app.config().vsync);
    }
}
