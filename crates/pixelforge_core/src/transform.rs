//! Screen-space transform: position, rotation (radians), scale.
//!
//! `Transform` is `Copy` and `Default`, making it easy to embed in any
//! struct.  Call `.affine()` to get the placement used by the renderer.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// The one component every entity carries.
///
/// Positions are in pixels with `+y` pointing down.  Rotation is in radians,
/// clockwise-positive on screen.
///
/// # Example
/// ```rust,ignore
/// use pixelforge_core::Transform;
/// use glam::Vec2;
///
/// let mut t = Transform::from_position(Vec2::new(100.0, 100.0));
/// t.translate(Vec2::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Top-left corner of the entity in pixels.
    #[serde(with = "crate::serde_vec2")]
    pub position: Vec2,
    /// Multiplier applied to the world's tile size when drawing.
    #[serde(with = "crate::serde_vec2")]
    pub scale: Vec2,
    /// Rotation about `position`, in radians.
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: Vec2::ONE,
        rotation: 0.0,
    };

    /// Construct with a position, no rotation and unit scale.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Translation followed by rotation: the local frame entity sprites are
    /// drawn in.  Scale is not folded in; the renderer sizes the sprite
    /// rectangle from it instead so labels keep their size.
    pub fn affine(&self) -> Affine2 {
        Affine2::from_angle_translation(self.rotation, self.position)
    }

    /// Apply a translation offset.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}
