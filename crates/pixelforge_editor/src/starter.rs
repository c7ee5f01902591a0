use glam::Vec2;
use pixelforge_core::{Collider, PlayerController, Sprite, World};

/// The world a fresh editor opens with: one controllable player.
pub fn starter_world() -> World {
    let mut world = World::new("default-world", "New Adventure", "Developer");
    world
        .spawn("player-1", "Player")
        .with_position(Vec2::new(100.0, 100.0))
        .with(Sprite {
            texture_id: "player".into(),
            color: "#3b82f6".into(),
            z_index: 10,
        })
        .with(Collider { size: Vec2::splat(32.0), is_trigger: false })
        .with(PlayerController { speed: 5.0 })
        .build()
        .expect("a new world has no ids to clash with");
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_core::{DEFAULT_BACKGROUND, DEFAULT_GRAVITY, TILE_SIZE};

    #[test]
    fn starter_world_shape() {
        let w = starter_world();
        assert_eq!(w.id, "default-world");
        assert_eq!(w.creator, "Developer");
        assert_eq!(w.len(), 1);
        assert!(w.tiles.is_empty());
        assert_eq!(w.settings.tile_size, TILE_SIZE);
        assert_eq!(w.settings.gravity, DEFAULT_GRAVITY);
        assert_eq!(w.settings.background_color, DEFAULT_BACKGROUND);

        let player = w.get("player-1").unwrap();
        assert_eq!(player.transform().position, Vec2::new(100.0, 100.0));
        assert_eq!(player.transform().scale, Vec2::ONE);
        assert_eq!(player.components.get::<PlayerController>().unwrap().speed, 5.0);
        assert_eq!(player.components.get::<Sprite>().unwrap().z_index, 10);
        assert_eq!(player.components.get::<Collider>().unwrap().size, Vec2::splat(32.0));
    }

    #[test]
    fn every_call_builds_a_fresh_player() {
        let (mut first, second) = (starter_world(), starter_world());
        first.despawn("player-1");
        assert!(first.is_empty());
        assert!(second.contains("player-1"));
        assert_eq!(starter_world(), second);
    }
}
