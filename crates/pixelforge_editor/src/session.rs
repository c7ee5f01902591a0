//! The editor's in-memory state: one world and an optional selection.
//!
//! Every mutation goes through the session so the selection can never point
//! at an entity that no longer exists.

use glam::Vec2;
use pixelforge_core::{Collider, Entity, SceneError, Sprite, Viewport, World};
use pixelforge_renderer::{render_world, DrawList, FrameStyle};
use rand::Rng;

use crate::assets::AssetTemplate;
use crate::sink::WorldSink;

/// Where freshly placed entities appear.
pub const SPAWN_POSITION: Vec2 = Vec2::new(100.0, 100.0);

/// Collider attached to freshly placed entities.
pub const SPAWN_COLLIDER: Vec2 = Vec2::new(32.0, 32.0);

const ID_PREFIX: &str = "e-";
const ID_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct EditorSession {
    world: World,
    selected: Option<String>,
}

impl EditorSession {
    pub fn new(world: World) -> Self {
        Self { world, selected: None }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    // ── Selection ──────────────────────────────────────────────────────────

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected.as_deref().and_then(|id| self.world.get(id))
    }

    fn selected_entity_mut(&mut self) -> Option<&mut Entity> {
        let id = self.selected.as_deref()?;
        self.world.get_mut(id)
    }

    /// Select `id`.  Unknown ids leave the selection unchanged and return
    /// `false`.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.world.contains(id) {
            return false;
        }
        self.selected = Some(id.to_owned());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selection to the next (or previous) entity in world order,
    /// wrapping around.  With nothing selected this picks the first (or last)
    /// entity.
    pub fn cycle_selection(&mut self, forward: bool) -> Option<&str> {
        let entities = self.world.entities();
        if entities.is_empty() {
            self.selected = None;
            return None;
        }
        let n = entities.len();
        let current = self
            .selected
            .as_deref()
            .and_then(|id| entities.iter().position(|e| e.id == id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
            (None, true) => 0,
            (None, false) => n - 1,
        };
        self.selected = Some(entities[next].id.clone());
        self.selected.as_deref()
    }

    // ── Editing ────────────────────────────────────────────────────────────

    /// Place a new entity built from `template` and select it.
    pub fn add_from_asset(&mut self, template: &AssetTemplate) -> Result<String, SceneError> {
        self.add_from_asset_with(&mut rand::thread_rng(), template)
    }

    /// [`add_from_asset`](Self::add_from_asset) with an explicit id source.
    pub fn add_from_asset_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        template: &AssetTemplate,
    ) -> Result<String, SceneError> {
        let id = loop {
            let candidate = random_id(rng);
            if !self.world.contains(&candidate) {
                break candidate;
            }
        };
        let id = self
            .world
            .spawn(id, template.name)
            .with_position(SPAWN_POSITION)
            .with(Sprite {
                texture_id: template.id.to_owned(),
                color: template.color.to_owned(),
                z_index: 1,
            })
            .with(Collider { size: SPAWN_COLLIDER, is_trigger: false })
            .build()?;
        log::debug!("placed `{}` from template `{}`", id, template.id);
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Overwrite the selected entity's position per axis; `None` keeps the
    /// current value.  Returns `false` without a selection.
    pub fn set_position(&mut self, x: Option<f32>, y: Option<f32>) -> bool {
        let Some(entity) = self.selected_entity_mut() else {
            return false;
        };
        let position = &mut entity.components.transform_mut().position;
        if let Some(x) = x {
            position.x = x;
        }
        if let Some(y) = y {
            position.y = y;
        }
        true
    }

    /// Shift the selected entity by `delta`.
    pub fn nudge(&mut self, delta: Vec2) -> bool {
        match self.selected_entity_mut() {
            Some(entity) => {
                entity.components.transform_mut().translate(delta);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        match self.selected_entity_mut() {
            Some(entity) => {
                entity.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Recolour the selected entity's sprite.  No-op (returns `false`) when
    /// there is no selection or it has no sprite.
    pub fn set_sprite_color(&mut self, color: impl Into<String>) -> bool {
        let Some(sprite) = self
            .selected_entity_mut()
            .and_then(|e| e.components.get_mut::<Sprite>())
        else {
            return false;
        };
        sprite.color = color.into();
        true
    }

    /// Remove the selected entity and clear the selection.
    pub fn delete_selected(&mut self) -> Option<Entity> {
        let id = self.selected.take()?;
        let removed = self.world.despawn(&id);
        if removed.is_some() {
            log::debug!("deleted `{id}`");
        }
        removed
    }

    // ── Output ─────────────────────────────────────────────────────────────

    /// Editor-style frame of the current world with the selection outlined.
    pub fn preview(&self, viewport: Viewport) -> DrawList {
        render_world(&self.world, viewport, &FrameStyle::editor(self.selected()))
    }

    /// Hand an independent copy of the world to `sink`.
    pub fn save(&self, sink: &mut impl WorldSink) {
        sink.save(self.world.clone());
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_LEN);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_LEN {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CATALOG;
    use crate::sink::ActiveWorld;
    use crate::starter::starter_world;
    use pixelforge_renderer::DrawCommand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> EditorSession {
        EditorSession::new(starter_world())
    }

    #[test]
    fn random_ids_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = random_id(&mut rng);
            assert_eq!(id.len(), 11);
            assert!(id.starts_with("e-"));
            assert!(id[2..].bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn add_from_asset_appends_and_selects() {
        let mut s = session();
        let coin = AssetTemplate::find("coin").unwrap();
        let id = s.add_from_asset_with(&mut StdRng::seed_from_u64(1), coin).unwrap();

        assert_eq!(s.selected(), Some(id.as_str()));
        assert_eq!(s.world().len(), 2);
        let e = &s.world().entities()[1];
        assert_eq!(e.id, id);
        assert_eq!(e.name, "Collectible Coin");
        assert_eq!(e.transform().position, SPAWN_POSITION);
        assert_eq!(e.transform().scale, Vec2::ONE);
        let sprite = e.components.get::<Sprite>().unwrap();
        assert_eq!(sprite.texture_id, "coin");
        assert_eq!(sprite.color, "#fbbf24");
        assert_eq!(sprite.z_index, 1);
        let collider = e.components.get::<Collider>().unwrap();
        assert_eq!(collider.size, SPAWN_COLLIDER);
        assert!(!collider.is_trigger);
    }

    #[test]
    fn repeated_adds_get_distinct_ids() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(3);
        for t in CATALOG.iter().cycle().take(20) {
            s.add_from_asset_with(&mut rng, t).unwrap();
        }
        assert_eq!(s.world().len(), 21);
        assert!(s.world().validate().is_ok());
    }

    #[test]
    fn select_unknown_keeps_selection() {
        let mut s = session();
        assert!(s.select("player-1"));
        assert!(!s.select("ghost"));
        assert_eq!(s.selected(), Some("player-1"));
        s.clear_selection();
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn cycle_selection_wraps() {
        let mut s = session();
        let id = s.add_from_asset(&CATALOG[0]).unwrap();
        s.clear_selection();
        assert_eq!(s.cycle_selection(true), Some("player-1"));
        assert_eq!(s.cycle_selection(true), Some(id.as_str()));
        assert_eq!(s.cycle_selection(true), Some("player-1"));
        assert_eq!(s.cycle_selection(false), Some(id.as_str()));
    }

    #[test]
    fn partial_position_update() {
        let mut s = session();
        assert!(!s.set_position(Some(1.0), None));
        s.select("player-1");
        assert!(s.set_position(Some(250.0), None));
        assert_eq!(s.world().position("player-1"), Some(Vec2::new(250.0, 100.0)));
        assert!(s.set_position(None, Some(40.0)));
        assert_eq!(s.world().position("player-1"), Some(Vec2::new(250.0, 40.0)));
        assert!(s.nudge(Vec2::new(-50.0, 2.0)));
        assert_eq!(s.world().position("player-1"), Some(Vec2::new(200.0, 42.0)));
    }

    #[test]
    fn rename_and_recolor() {
        let mut s = session();
        s.select("player-1");
        assert!(s.rename("Hero"));
        assert!(s.set_sprite_color("#ff0000"));
        let e = s.selected_entity().unwrap();
        assert_eq!(e.name, "Hero");
        assert_eq!(e.components.get::<Sprite>().unwrap().color, "#ff0000");
    }

    #[test]
    fn recolor_without_sprite_is_noop() {
        let mut w = World::new("w", "W", "me");
        w.spawn("bare", "Bare").build().unwrap();
        let mut s = EditorSession::new(w);
        s.select("bare");
        assert!(!s.set_sprite_color("#ff0000"));
        assert!(!s.world().get("bare").unwrap().components.has::<Sprite>());
    }

    #[test]
    fn delete_selected_clears_selection() {
        let mut s = session();
        assert!(s.delete_selected().is_none());
        s.select("player-1");
        let removed = s.delete_selected().unwrap();
        assert_eq!(removed.id, "player-1");
        assert!(s.world().is_empty());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn preview_outlines_selection() {
        let mut s = session();
        let vp = Viewport::new(320, 240);
        let outlines = |list: &DrawList| {
            list.iter()
                .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
                .count()
        };
        assert_eq!(outlines(&s.preview(vp)), 0);
        s.select("player-1");
        assert_eq!(outlines(&s.preview(vp)), 1);
    }

    #[test]
    fn saved_world_is_independent() {
        let mut s = session();
        let mut slot = ActiveWorld::new(World::new("empty", "Empty", "me"));
        s.save(&mut slot);
        s.select("player-1");
        s.rename("Changed");
        s.delete_selected();

        assert_eq!(slot.world(), &starter_world());
        assert!(s.world().is_empty());
    }
}
