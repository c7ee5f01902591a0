//! CPU rasterizer for [`DrawList`]s.
//!
//! Coverage is decided per pixel centre: a pixel is painted when its centre
//! `(x + 0.5, y + 0.5)`, mapped back into a shape's local frame, lands inside
//! the shape.  There is no anti-aliasing, which keeps output exact and
//! reproducible.  Translucent colours are blended source-over.
//!
//! Text uses the 8x8 bitmap glyphs of `font8x8`, one glyph cell per `size`
//! units, placed by the command's transform like any other shape.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use glam::{Affine2, Vec2};
use pixelforge_core::Color;

use crate::draw_list::{DrawCommand, DrawList, Rect};

/// Thinnest stroke that still covers one pixel row.
const MIN_STROKE: f32 = 1.0;

/// Glyph bitmaps are 8x8; the last row is reserved for descenders.
const GLYPH_CELLS: usize = 8;
const GLYPH_BASELINE_ROW: usize = 7;

/// RGBA8 pixel buffer, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    /// A transparent-black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw bytes, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Paint every command of `list` in order.
    pub fn draw(&mut self, list: &DrawList) {
        for command in list {
            match command {
                DrawCommand::Clear { color } => self.fill(*color),
                DrawCommand::Line { from, to, width, color } => self.line(*from, *to, *width, *color),
                DrawCommand::FillRect { transform, rect, color } => {
                    self.fill_quad(*transform, *rect, *color)
                }
                DrawCommand::StrokeRect { transform, rect, width, color } => {
                    self.stroke_rect(*transform, *rect, *width, *color)
                }
                DrawCommand::Text { transform, origin, size, text, color } => {
                    self.text(*transform, *origin, *size, text, *color)
                }
            }
        }
    }

    fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        if rgba[3] == 255 {
            self.pixels.fill(rgba);
        } else {
            for px in &mut self.pixels {
                *px = blend(*px, rgba);
            }
        }
    }

    /// Fill `rect` (local coordinates) placed by `transform`.
    fn fill_quad(&mut self, transform: Affine2, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let rgba = color.to_rgba8();
        if rgba[3] == 0 {
            return;
        }

        // screen-space bounding box of the transformed corners
        let corners = rect.corners().map(|c| transform.transform_point2(c));
        let min = corners.iter().fold(Vec2::splat(f32::INFINITY), |m, c| m.min(*c));
        let max = corners.iter().fold(Vec2::splat(f32::NEG_INFINITY), |m, c| m.max(*c));

        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        let inverse = transform.inverse();
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if rect.contains(inverse.transform_point2(centre)) {
                    let px = &mut self.pixels[(y * self.width + x) as usize];
                    *px = blend(*px, rgba);
                }
            }
        }
    }

    /// A line is a thin rectangle along its direction, centred on the path.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let d = to - from;
        let length = d.length();
        if length <= 0.0 {
            return;
        }
        let thickness = width.max(MIN_STROKE);

        // grid lines are axis-aligned; keep them off the rotation path so
        // they land on exact pixel columns and rows
        if d.x == 0.0 || d.y == 0.0 {
            let min = from.min(to);
            let rect = if d.x == 0.0 {
                Rect::new(min.x - thickness / 2.0, min.y, thickness, d.y.abs())
            } else {
                Rect::new(min.x, min.y - thickness / 2.0, d.x.abs(), thickness)
            };
            self.fill_quad(Affine2::IDENTITY, rect, color);
            return;
        }

        let transform = Affine2::from_angle_translation(d.y.atan2(d.x), from);
        self.fill_quad(
            transform,
            Rect::new(0.0, -thickness / 2.0, length, thickness),
            color,
        );
    }

    /// Four bands centred on the edges of `rect`; corners are covered once.
    fn stroke_rect(&mut self, transform: Affine2, rect: Rect, width: f32, color: Color) {
        let w = width.max(MIN_STROKE);
        let h = w / 2.0;
        let outer = rect.inflate(h);
        let bands = [
            Rect::new(outer.x, outer.y, outer.width, w),
            Rect::new(outer.x, rect.y + rect.height - h, outer.width, w),
            Rect::new(outer.x, rect.y + h, w, rect.height - w),
            Rect::new(rect.x + rect.width - h, rect.y + h, w, rect.height - w),
        ];
        for band in bands {
            self.fill_quad(transform, band, color);
        }
    }
}

impl Framebuffer {
    /// Each lit glyph bit becomes a square of `size / 8` local units; the
    /// baseline sits under row seven and every glyph advances by `size`.
    fn text(&mut self, transform: Affine2, origin: Vec2, size: f32, text: &str, color: Color) {
        if size <= 0.0 {
            return;
        }
        let cell = size / GLYPH_CELLS as f32;
        let top = origin.y - GLYPH_BASELINE_ROW as f32 * cell;

        for (index, ch) in text.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
                log::trace!("no glyph for {ch:?}");
                continue;
            };
            let left = origin.x + index as f32 * size;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_CELLS {
                    // bit 0 is the leftmost column
                    if bits & (1 << col) != 0 {
                        let rect = Rect::new(
                            left + col as f32 * cell,
                            top + row as f32 * cell,
                            cell,
                            cell,
                        );
                        self.fill_quad(transform, rect, color);
                    }
                }
            }
        }
    }
}

/// Source-over blend of an 8-bit colour onto an existing pixel.
fn blend(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => src,
        0 => dst,
        a => {
            let a = a as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
            let out_a = a + dst[3] as u32 * (255 - a) / 255;
            [
                mix(src[0], dst[0]),
                mix(src[1], dst[1]),
                mix(src[2], dst[2]),
                out_a.min(255) as u8,
            ]
        }
    }
}
