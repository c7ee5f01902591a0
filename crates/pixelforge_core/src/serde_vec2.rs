//! Serializes `glam::Vec2` as an `{ "x": .., "y": .. }` object instead of
//! glam's default tuple form, so snapshots read the same as hand-written
//! world files.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Xy {
    x: f32,
    y: f32,
}

pub fn serialize<S: Serializer>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
    Xy { x: v.x, y: v.y }.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
    let Xy { x, y } = Xy::deserialize(deserializer)?;
    Ok(Vec2::new(x, y))
}
