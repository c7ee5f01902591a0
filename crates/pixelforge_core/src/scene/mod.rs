//! World model: entities, components, tiles and settings.

pub mod components;
pub mod controller;
pub mod snapshot;
pub mod world;

pub use components::{
    AnyComponent, Collider, Component, ComponentKind, Components, PlayerController, Script, Sprite,
};
pub use controller::MoveBindings;
pub use snapshot::SnapshotError;
pub use world::{Entity, EntityBuilder, SceneError, Tile, World, WorldSettings};
