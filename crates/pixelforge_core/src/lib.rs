// pixelforge_core: world model and shared utilities

pub mod color;
pub mod input;
pub mod scene;
pub mod time;
pub mod transform;
pub mod viewport;

mod serde_vec2;

pub use color::{Color, ColorError};
pub use input::{InputCode, InputTracker};
pub use scene::{
    AnyComponent, Collider, Component, ComponentKind, Components, Entity, EntityBuilder,
    MoveBindings, PlayerController, SceneError, Script, SnapshotError, Sprite, Tile, World,
    WorldSettings,
};
pub use time::{FrameClock, Instant, Time};
pub use transform::Transform;
pub use viewport::Viewport;

// glam is re-exported so downstream crates agree on the math types
pub use glam;

/// Edge length of one grid cell in pixels for freshly created worlds.
pub const TILE_SIZE: f32 = 32.0;

/// Gravity stored in freshly created worlds.  Nothing consumes it yet.
pub const DEFAULT_GRAVITY: f32 = 0.5;

/// Background colour of freshly created worlds.
pub const DEFAULT_BACKGROUND: &str = "#0f172a";
