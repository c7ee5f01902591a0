use std::fmt;

/// What an asset template stands for.  Both kinds currently spawn the same
/// entity shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Sprite,
    Prefab,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Sprite => "sprite",
            AssetKind::Prefab => "prefab",
        })
    }
}

/// Read-only description of something that can be placed in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTemplate {
    /// Becomes the spawned sprite's `texture_id`.
    pub id: &'static str,
    pub name: &'static str,
    pub kind: AssetKind,
    /// Hex colour of the spawned sprite.
    pub color: &'static str,
}

/// Built-in templates, in palette order.
pub static CATALOG: [AssetTemplate; 5] = [
    AssetTemplate { id: "grass", name: "Grass Block", kind: AssetKind::Sprite, color: "#22c55e" },
    AssetTemplate { id: "stone", name: "Stone Block", kind: AssetKind::Sprite, color: "#64748b" },
    AssetTemplate { id: "player", name: "Player Start", kind: AssetKind::Prefab, color: "#ef4444" },
    AssetTemplate { id: "coin", name: "Collectible Coin", kind: AssetKind::Prefab, color: "#fbbf24" },
    AssetTemplate { id: "lava", name: "Danger Tile", kind: AssetKind::Sprite, color: "#f97316" },
];

impl AssetTemplate {
    /// Look a template up by id.
    pub fn find(id: &str) -> Option<&'static AssetTemplate> {
        CATALOG.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_core::Color;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(CATALOG[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }

    #[test]
    fn catalog_colors_parse() {
        for t in &CATALOG {
            assert!(Color::from_hex_str(t.color).is_ok(), "{}", t.color);
        }
    }

    #[test]
    fn find_by_id() {
        let lava = AssetTemplate::find("lava").unwrap();
        assert_eq!(lava.name, "Danger Tile");
        assert_eq!(lava.kind.to_string(), "sprite");
        assert!(AssetTemplate::find("water").is_none());
    }
}
