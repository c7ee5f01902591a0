/// Pixel dimensions of the drawable area.
///
/// The simulation clamps colliders against it and the renderer sizes the
/// grid and clear to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is zero; nothing can be drawn into it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 576)
    }
}
