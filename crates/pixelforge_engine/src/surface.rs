use pixelforge_renderer::{DrawList, Framebuffer};

/// Where finished frames go.
///
/// The engine builds a [`DrawList`] per tick and hands it to its surface;
/// how it reaches the screen (software raster, GPU upload, nowhere) is the
/// surface's business.
pub trait Surface {
    /// Pixel size of the drawable area.
    fn size(&self) -> (u32, u32);

    /// `false` when nothing can be drawn; the engine refuses to start on
    /// such a surface.
    fn is_drawable(&self) -> bool {
        let (w, h) = self.size();
        w > 0 && h > 0
    }

    /// Present one frame.
    fn present(&mut self, frame: &DrawList);
}

impl Surface for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn present(&mut self, frame: &DrawList) {
        self.draw(frame);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn is_drawable(&self) -> bool {
        (**self).is_drawable()
    }

    fn present(&mut self, frame: &DrawList) {
        (**self).present(frame)
    }
}
