//! Scene world: the complete authorable and playable state.
//!
//! `World` keeps its entities in a `Vec` because order matters: it is both
//! the iteration order of the simulation and the draw order of the renderer.
//! Entity ids are strings chosen by whoever creates the entity (the editor
//! generates random ones) and must be unique within a world.
//!
//! # Quick start
//! ```rust,ignore
//! use pixelforge_core::{World, Sprite, Collider, PlayerController};
//! use glam::Vec2;
//!
//! let mut world = World::new("w1", "Sandbox", "me");
//!
//! world.spawn("player-1", "Player")
//!     .with_position(Vec2::new(100.0, 100.0))
//!     .with(Collider { size: Vec2::splat(32.0), is_trigger: false })
//!     .with(PlayerController { speed: 5.0 })
//!     .build()?;
//!
//! world.despawn("player-1");
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::components::{AnyComponent, Components};
use crate::transform::Transform;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("an entity with id `{0}` already exists")]
    DuplicateId(String),
}

// ─── Entity ────────────────────────────────────────────────────────────────

/// One addressable object in the world.
///
/// All fields are public so the editor can edit them directly; only the id
/// must not be changed once the entity is inside a [`World`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique within the owning world.
    pub id: String,
    /// Human-readable label, drawn above the sprite.
    pub name: String,
    pub components: Components,
}

impl Entity {
    /// An entity with only a default transform.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: Components::default(),
        }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        self.components.transform()
    }
}

// ─── Tile ──────────────────────────────────────────────────────────────────

/// A filled grid cell.  `x`/`y` are cell coordinates, not pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    /// Tile type, e.g. `"grass"`.  Rendered with a placeholder colour for now.
    #[serde(rename = "type")]
    pub kind: String,
}

// ─── Settings ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSettings {
    /// Reserved for a future physics step; the simulation does not read it.
    pub gravity: f32,
    /// CSS hex colour the frame is cleared to.
    pub background_color: String,
    /// Edge length of a grid cell in pixels; also the base sprite size.
    pub tile_size: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: crate::DEFAULT_GRAVITY,
            background_color: crate::DEFAULT_BACKGROUND.to_string(),
            tile_size: crate::TILE_SIZE,
        }
    }
}

// ─── Entity builder ────────────────────────────────────────────────────────

/// Fluent builder returned by [`World::spawn`].
///
/// Call `.build()` to insert the entity.
pub struct EntityBuilder<'a> {
    world: &'a mut World,
    entity: Entity,
}

impl<'a> EntityBuilder<'a> {
    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.entity.components.transform_mut().position = pos;
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.entity.components.transform_mut().rotation = radians;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.entity.components.transform_mut().scale = scale;
        self
    }

    /// Attach any component; a second component of the same kind replaces
    /// the first.
    pub fn with(mut self, component: impl Into<AnyComponent>) -> Self {
        self.entity.components.insert(component);
        self
    }

    /// Finalise the builder and append the entity.  Returns its id.
    pub fn build(self) -> Result<String, SceneError> {
        let id = self.entity.id.clone();
        self.world.insert(self.entity)?;
        Ok(id)
    }
}

// ─── World ─────────────────────────────────────────────────────────────────

/// The primary scene container.
///
/// Cloning a `World` is a deep copy; the engine relies on this to run play
/// sessions on a private instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub id: String,
    pub name: String,
    pub creator: String,
    entities: Vec<Entity>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub settings: WorldSettings,
}

impl World {
    /// Creates an empty world with default settings.
    pub fn new(id: impl Into<String>, name: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            creator: creator.into(),
            entities: Vec::new(),
            tiles: Vec::new(),
            settings: WorldSettings::default(),
        }
    }

    // ── Spawning ───────────────────────────────────────────────────────────

    /// Begin building a new entity.
    ///
    /// ```rust,ignore
    /// world.spawn("coin-1", "Coin")
    ///     .with_position(Vec2::new(64.0, 32.0))
    ///     .build()?;
    /// ```
    pub fn spawn(&mut self, id: impl Into<String>, name: impl Into<String>) -> EntityBuilder<'_> {
        EntityBuilder {
            world: self,
            entity: Entity::new(id, name),
        }
    }

    /// Append an entity, keeping ids unique.
    pub fn insert(&mut self, entity: Entity) -> Result<(), SceneError> {
        if self.contains(&entity.id) {
            return Err(SceneError::DuplicateId(entity.id));
        }
        self.entities.push(entity);
        Ok(())
    }

    // ── Despawn ────────────────────────────────────────────────────────────

    /// Remove the entity, preserving the order of the others.
    pub fn despawn(&mut self, id: &str) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    // ── Lookup ─────────────────────────────────────────────────────────────

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Mutable reference to an entity; use this for multi-field edits.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Returns `true` if the world contains this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Read the position of an entity.
    pub fn position(&self, id: &str) -> Option<Vec2> {
        self.get(id).map(|e| e.transform().position)
    }

    // ── Iteration ──────────────────────────────────────────────────────────

    /// Entities in insertion (draw) order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Total number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ── Invariants ─────────────────────────────────────────────────────────

    /// Check id uniqueness.  Needed after deserialization, which bypasses
    /// [`World::insert`].
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = std::collections::HashSet::new();
        for e in &self.entities {
            if !seen.insert(e.id.as_str()) {
                return Err(SceneError::DuplicateId(e.id.clone()));
            }
        }
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────
