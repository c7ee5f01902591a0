use glam::Vec2;

use crate::input::{InputCode, InputTracker};

/// Maps input codes to the four screen directions used by player movement.
///
/// Each direction is checked independently: it counts once when *any* of its
/// codes is held, so holding `KeyW` and `ArrowUp` together is no faster than
/// holding either.  Opposite directions held together cancel.
///
/// # Example
/// ```rust,ignore
/// use pixelforge_core::MoveBindings;
///
/// let mut bindings = MoveBindings::wasd_and_arrows();
/// // allow IJKL as an extra layout
/// bindings.bind_up("KeyI");
/// bindings.bind_left("KeyJ");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveBindings {
    up: Vec<InputCode>,
    down: Vec<InputCode>,
    left: Vec<InputCode>,
    right: Vec<InputCode>,
}

impl MoveBindings {
    /// Creates a set with no bindings; nothing will ever move.
    pub fn new() -> Self {
        Self::default()
    }

    /// `W`/`A`/`S`/`D` plus the arrow keys.
    pub fn wasd_and_arrows() -> Self {
        let mut b = Self::new();
        b.bind_up("KeyW");
        b.bind_up("ArrowUp");
        b.bind_down("KeyS");
        b.bind_down("ArrowDown");
        b.bind_left("KeyA");
        b.bind_left("ArrowLeft");
        b.bind_right("KeyD");
        b.bind_right("ArrowRight");
        b
    }

    pub fn bind_up(&mut self, code: impl Into<InputCode>) {
        self.up.push(code.into());
    }

    pub fn bind_down(&mut self, code: impl Into<InputCode>) {
        self.down.push(code.into());
    }

    pub fn bind_left(&mut self, code: impl Into<InputCode>) {
        self.left.push(code.into());
    }

    pub fn bind_right(&mut self, code: impl Into<InputCode>) {
        self.right.push(code.into());
    }

    /// Returns the raw direction for the codes currently held.
    ///
    /// Components are each -1, 0 or 1 with `+y` pointing down.  The result
    /// is **not** normalised; callers decide how to scale it.
    pub fn direction(&self, input: &InputTracker) -> Vec2 {
        let any = |codes: &[InputCode]| codes.iter().any(|c| input.is_held(c.as_str()));

        let mut out = Vec2::ZERO;
        if any(&self.up) {
            out.y -= 1.0;
        }
        if any(&self.down) {
            out.y += 1.0;
        }
        if any(&self.left) {
            out.x -= 1.0;
        }
        if any(&self.right) {
            out.x += 1.0;
        }
        out
    }
}
