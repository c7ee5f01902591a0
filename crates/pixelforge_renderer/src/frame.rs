//! Builds the draw list for one frame of a world.

use glam::{Affine2, Vec2};
use pixelforge_core::{Color, Sprite, Viewport, World};

use crate::draw_list::{DrawCommand, DrawList, Rect};

/// Placeholder fill for every tile until tile types get their own look.
const TILE_COLOR: Color = Color::rgb(0x1e as f32 / 255.0, 0x29 as f32 / 255.0, 0x3b as f32 / 255.0);
/// Used when a sprite or background colour string cannot be parsed.
const FALLBACK_COLOR: Color = Color::MAGENTA;

const LABEL_SIZE: f32 = 10.0;
const LABEL_OFFSET: Vec2 = Vec2::new(0.0, -5.0);

const SELECTION_MARGIN: f32 = 2.0;
const SELECTION_WIDTH: f32 = 2.0;

/// Tile sizes below this many pixels get no grid: the lines would cover
/// the whole canvas anyway, and their count grows without bound.
const MIN_GRID_SPACING: f32 = 2.0;

/// Fixed presentation choices that are not part of the world.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyle {
    pub grid_color: Color,
    pub grid_width: f32,
    pub label_color: Color,
    /// Entity to outline.  Only the editor style sets this.
    pub selection: Option<String>,
    pub selection_color: Color,
}

impl FrameStyle {
    /// Style used while a world is being played.
    pub fn play() -> Self {
        Self {
            grid_color: TILE_COLOR,
            grid_width: 1.0,
            label_color: Color::WHITE,
            selection: None,
            selection_color: Color::rgb(0x3b as f32 / 255.0, 0x82 as f32 / 255.0, 0xf6 as f32 / 255.0),
        }
    }

    /// Style used by the editor preview, outlining `selected` if given.
    pub fn editor(selected: Option<&str>) -> Self {
        Self {
            grid_color: Color::rgb(0x33 as f32 / 255.0, 0x41 as f32 / 255.0, 0x55 as f32 / 255.0),
            grid_width: 0.5,
            selection: selected.map(str::to_owned),
            ..Self::play()
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::play()
    }
}

fn parse_color(hex: &str) -> Color {
    Color::from_hex_str(hex).unwrap_or_else(|e| {
        log::trace!("{e}; drawing with the fallback colour");
        FALLBACK_COLOR
    })
}

/// Positions `0, tile, 2 * tile, ..` strictly below `extent`.
fn grid_offsets(extent: f32, tile: f32) -> impl Iterator<Item = f32> {
    let count = (extent / tile).ceil() as usize;
    (0..count)
        .map(move |i| i as f32 * tile)
        .take_while(move |&offset| offset < extent)
}

/// Describe one frame of `world` as seen through `viewport`.
///
/// Draw order: background, grid, tiles, then entities with a [`Sprite`] in
/// world order.  Entities without a sprite are invisible.  A tile size that
/// is not strictly positive suppresses the grid and the tiles; one below
/// two pixels suppresses only the grid.
pub fn render_world(world: &World, viewport: Viewport, style: &FrameStyle) -> DrawList {
    let mut list = DrawList::new();
    let tile = world.settings.tile_size;
    let (width, height) = (viewport.width_f32(), viewport.height_f32());

    list.push(DrawCommand::Clear {
        color: parse_color(&world.settings.background_color),
    });

    if tile > 0.0 {
        // ── Grid ───────────────────────────────────────────────────────────
        if tile >= MIN_GRID_SPACING {
            for x in grid_offsets(width, tile) {
                list.push(DrawCommand::Line {
                    from: Vec2::new(x, 0.0),
                    to: Vec2::new(x, height),
                    width: style.grid_width,
                    color: style.grid_color,
                });
            }
            for y in grid_offsets(height, tile) {
                list.push(DrawCommand::Line {
                    from: Vec2::new(0.0, y),
                    to: Vec2::new(width, y),
                    width: style.grid_width,
                    color: style.grid_color,
                });
            }
        }

        // ── Tiles ──────────────────────────────────────────────────────────
        for t in &world.tiles {
            list.push(DrawCommand::FillRect {
                transform: Affine2::IDENTITY,
                rect: Rect::new(t.x as f32 * tile, t.y as f32 * tile, tile, tile),
                color: TILE_COLOR,
            });
        }
    }

    // ── Entities ───────────────────────────────────────────────────────────
    for entity in world.iter() {
        let Some(sprite) = entity.components.get::<Sprite>() else {
            continue;
        };
        let t = entity.transform();
        let transform = t.affine();
        let rect = Rect::new(0.0, 0.0, tile * t.scale.x, tile * t.scale.y);

        list.push(DrawCommand::FillRect {
            transform,
            rect,
            color: parse_color(&sprite.color),
        });
        list.push(DrawCommand::Text {
            transform,
            origin: LABEL_OFFSET,
            size: LABEL_SIZE,
            text: entity.name.clone(),
            color: style.label_color,
        });

        if style.selection.as_deref() == Some(entity.id.as_str()) {
            list.push(DrawCommand::StrokeRect {
                transform,
                rect: rect.inflate(SELECTION_MARGIN),
                width: SELECTION_WIDTH,
                color: style.selection_color,
            });
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_core::{Collider, Tile};

    fn sprite(color: &str) -> Sprite {
        Sprite {
            texture_id: "t".into(),
            color: color.into(),
            z_index: 0,
        }
    }

    fn world() -> World {
        let mut w = World::new("w", "Test", "tester");
        w.spawn("a", "Alpha")
            .with_position(Vec2::new(100.0, 100.0))
            .with(sprite("#ef4444"))
            .build()
            .unwrap();
        w.spawn("ghost", "No Sprite")
            .with(Collider { size: Vec2::splat(32.0), is_trigger: false })
            .build()
            .unwrap();
        w.spawn("b", "Beta")
            .with_position(Vec2::new(200.0, 50.0))
            .with_rotation(0.5)
            .with_scale(Vec2::new(2.0, 0.5))
            .with(sprite("#22c55e"))
            .build()
            .unwrap();
        w.tiles.push(Tile { x: 2, y: 3, kind: "stone".into() });
        w
    }

    fn fills(list: &DrawList) -> Vec<(Affine2, Rect, Color)> {
        list.iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { transform, rect, color } => Some((*transform, *rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_with_background_clear() {
        let list = render_world(&world(), Viewport::new(1024, 576), &FrameStyle::play());
        assert_eq!(
            list.commands()[0],
            DrawCommand::Clear { color: Color::from_hex_str("#0f172a").unwrap() }
        );
    }

    #[test]
    fn grid_lines_every_tile() {
        let list = render_world(&world(), Viewport::new(1024, 576), &FrameStyle::play());
        let lines: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        // 1024 / 32 vertical + 576 / 32 horizontal
        assert_eq!(lines.len(), 32 + 18);
        assert_eq!(lines[1], (Vec2::new(32.0, 0.0), Vec2::new(32.0, 576.0)));
        assert_eq!(lines[32], (Vec2::new(0.0, 0.0), Vec2::new(1024.0, 0.0)));
    }

    #[test]
    fn tiles_then_sprites_in_world_order() {
        let list = render_world(&world(), Viewport::new(1024, 576), &FrameStyle::play());
        let fills = fills(&list);
        assert_eq!(fills.len(), 3);
        assert_eq!(fills[0].1, Rect::new(64.0, 96.0, 32.0, 32.0));
        assert_eq!(fills[1].2, Color::from_hex_str("#ef4444").unwrap());
        assert_eq!(fills[2].2, Color::from_hex_str("#22c55e").unwrap());
    }

    #[test]
    fn sprite_rect_uses_scale_and_transform() {
        let list = render_world(&world(), Viewport::new(1024, 576), &FrameStyle::play());
        let (transform, rect, _) = fills(&list)[2];
        assert_eq!(rect, Rect::new(0.0, 0.0, 64.0, 16.0));
        let expected = Affine2::from_angle_translation(0.5, Vec2::new(200.0, 50.0));
        assert!(transform.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn labels_carry_entity_names() {
        let list = render_world(&world(), Viewport::new(1024, 576), &FrameStyle::play());
        let labels: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![("Alpha", Vec2::new(0.0, -5.0)), ("Beta", Vec2::new(0.0, -5.0))]);
    }

    #[test]
    fn selection_outline_only_in_editor_style() {
        let w = world();
        let vp = Viewport::new(1024, 576);
        let outlines = |list: &DrawList| {
            list.iter()
                .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
                .count()
        };
        assert_eq!(outlines(&render_world(&w, vp, &FrameStyle::play())), 0);
        assert_eq!(outlines(&render_world(&w, vp, &FrameStyle::editor(None))), 0);

        let list = render_world(&w, vp, &FrameStyle::editor(Some("a")));
        assert_eq!(outlines(&list), 1);
        let outline = list.iter().find_map(|c| match c {
            DrawCommand::StrokeRect { rect, .. } => Some(*rect),
            _ => None,
        });
        assert_eq!(outline, Some(Rect::new(-2.0, -2.0, 36.0, 36.0)));
    }

    #[test]
    fn non_positive_tile_size_skips_grid_and_tiles() {
        let mut w = world();
        w.settings.tile_size = 0.0;
        let list = render_world(&w, Viewport::new(1024, 576), &FrameStyle::play());
        assert!(!list.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        // only the two zero-sized sprites remain
        assert_eq!(fills(&list).len(), 2);
    }

    #[test]
    fn microscopic_tile_size_stays_bounded() {
        let mut w = world();
        w.settings.tile_size = 1e-7;
        let list = render_world(&w, Viewport::new(1024, 576), &FrameStyle::play());
        assert!(!list.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        // clear, one tile, two sprites with their labels
        assert_eq!(list.len(), 1 + 1 + 2 * 2);
    }

    #[test]
    fn grid_stops_short_of_the_far_edge() {
        let mut w = world();
        w.settings.tile_size = 7.0;
        let list = render_world(&w, Viewport::new(100, 14), &FrameStyle::play());
        let lines: Vec<_> = list
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, .. } => Some(*from),
                _ => None,
            })
            .collect();
        // x = 0, 7, .., 98 and y = 0, 7
        assert_eq!(lines.len(), 15 + 2);
        assert_eq!(lines[14], Vec2::new(98.0, 0.0));
        assert_eq!(lines[16], Vec2::new(0.0, 7.0));
    }

    #[test]
    fn bad_colours_fall_back() {
        let mut w = world();
        w.settings.background_color = "navy".into();
        let list = render_world(&w, Viewport::new(64, 64), &FrameStyle::play());
        assert_eq!(list.commands()[0], DrawCommand::Clear { color: FALLBACK_COLOR });
    }

    #[test]
    fn rendering_twice_gives_the_same_list() {
        let w = world();
        let vp = Viewport::new(1024, 576);
        let style = FrameStyle::editor(Some("b"));
        assert_eq!(render_world(&w, vp, &style), render_world(&w, vp, &style));
    }
}
