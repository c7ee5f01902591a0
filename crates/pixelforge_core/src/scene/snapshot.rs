//! JSON snapshots of a [`World`].
//!
//! The snapshot is the only artifact exchanged between the editor and the
//! engine, and the form a world is saved or loaded in.  Field names follow
//! the world file format (`backgroundColor`, `tileSize`, component maps keyed
//! by kind name, ...).

use thiserror::Error;

use super::world::{SceneError, World};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed world snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid world snapshot: {0}")]
    Invalid(#[from] SceneError),
}

impl World {
    /// Parse a snapshot and check its invariants.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let world: World = serde_json::from_str(json)?;
        world.validate()?;
        log::debug!(
            "loaded world `{}` ({} entities, {} tiles)",
            world.id,
            world.len(),
            world.tiles.len()
        );
        Ok(world)
    }

    /// Compact JSON snapshot.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON snapshot, for logs and hand editing.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Collider, PlayerController, Script, Sprite, Tile};
    use glam::Vec2;

    const SNAPSHOT: &str = r##"{
        "id": "default-world",
        "name": "New Adventure",
        "creator": "Developer",
        "entities": [{
            "id": "player-1",
            "name": "Player",
            "components": {
                "Transform": { "position": { "x": 100, "y": 100 }, "scale": { "x": 1, "y": 1 }, "rotation": 0 },
                "Sprite": { "textureId": "player", "color": "#3b82f6", "zIndex": 10 },
                "Collider": { "size": { "x": 32, "y": 32 }, "isTrigger": false },
                "PlayerController": { "speed": 5 }
            }
        }],
        "tiles": [{ "x": 2, "y": 3, "type": "grass" }],
        "settings": { "gravity": 0.5, "backgroundColor": "#0f172a", "tileSize": 32 }
    }"##;

    #[test]
    fn parses_world_file_format() {
        let world = World::from_json(SNAPSHOT).unwrap();
        assert_eq!(world.name, "New Adventure");
        let player = world.get("player-1").unwrap();
        assert_eq!(player.transform().position, Vec2::new(100.0, 100.0));
        assert_eq!(player.components.get::<Sprite>().unwrap().z_index, 10);
        assert_eq!(player.components.get::<Collider>().unwrap().size, Vec2::splat(32.0));
        assert_eq!(player.components.get::<PlayerController>().unwrap().speed, 5.0);
        assert!(!player.components.has::<Script>());
        assert_eq!(world.tiles, vec![Tile { x: 2, y: 3, kind: "grass".into() }]);
        assert_eq!(world.settings.tile_size, 32.0);
    }

    #[test]
    fn snapshot_round_trips() {
        let world = World::from_json(SNAPSHOT).unwrap();
        let again = World::from_json(&world.to_json_pretty().unwrap()).unwrap();
        assert_eq!(world, again);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"{
            "id": "w", "name": "n", "creator": "c",
            "entities": [
                { "id": "a", "name": "A", "components": { "Transform": { "position": { "x": 0, "y": 0 }, "scale": { "x": 1, "y": 1 }, "rotation": 0 } } },
                { "id": "a", "name": "B", "components": { "Transform": { "position": { "x": 0, "y": 0 }, "scale": { "x": 1, "y": 1 }, "rotation": 0 } } }
            ]
        }"#;
        assert!(matches!(
            World::from_json(json),
            Err(SnapshotError::Invalid(SceneError::DuplicateId(id))) if id == "a"
        ));
    }

    #[test]
    fn missing_transform_is_malformed() {
        let json = r#"{
            "id": "w", "name": "n", "creator": "c",
            "entities": [{ "id": "a", "name": "A", "components": {} }]
        }"#;
        assert!(matches!(World::from_json(json), Err(SnapshotError::Json(_))));
    }
}
