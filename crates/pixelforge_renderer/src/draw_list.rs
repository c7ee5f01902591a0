use glam::{Affine2, Vec2};
use pixelforge_core::Color;

/// Axis-aligned rectangle in pixels.  `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment test: left/top edges inside, right/bottom out.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Grow (positive) or shrink (negative) by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
    }
}

/// One drawing operation.
///
/// Shapes that belong to an entity carry the entity's placement in
/// `transform` and their geometry in that local frame.  Every command is
/// self-contained: no state carries over from one command to the next.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target.
    Clear { color: Color },
    /// Straight stroke in screen space, `width` pixels thick.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    FillRect {
        transform: Affine2,
        rect: Rect,
        color: Color,
    },
    /// Outline centred on the edges of `rect`.
    StrokeRect {
        transform: Affine2,
        rect: Rect,
        width: f32,
        color: Color,
    },
    /// Text whose baseline starts at `origin` in the local frame.
    Text {
        transform: Affine2,
        origin: Vec2,
        size: f32,
        text: String,
        color: Color,
    },
}

/// Ordered list of [`DrawCommand`]s making up one frame.
///
/// Later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
