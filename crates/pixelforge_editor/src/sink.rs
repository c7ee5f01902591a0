use pixelforge_core::World;

/// Receives worlds the editor saves.
///
/// The sink always gets its own copy; later edits in the session never reach
/// a world that was already saved.
pub trait WorldSink {
    fn save(&mut self, world: World);
}

/// Writes the saved world to the log as pretty JSON and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WorldSink for LogSink {
    fn save(&mut self, world: World) {
        log_saved(&world);
    }
}

/// The world play mode runs: replaced on every save, and logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWorld {
    world: World,
    saves: u32,
}

impl ActiveWorld {
    pub fn new(world: World) -> Self {
        Self { world, saves: 0 }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// How many times this slot has been overwritten.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl WorldSink for ActiveWorld {
    fn save(&mut self, world: World) {
        log_saved(&world);
        self.world = world;
        self.saves += 1;
    }
}

fn log_saved(world: &World) {
    match world.to_json_pretty() {
        Ok(json) => log::info!("World saved: {json}"),
        Err(e) => log::warn!("World `{}` saved but could not be serialized: {e}", world.id),
    }
}
