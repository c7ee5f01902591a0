//! `pixelforge_renderer`: turns a world into pixels in two steps.
//!
//! # Module layout
//!
//! | Module      | Responsibility                                          |
//! |-------------|---------------------------------------------------------|
//! | `draw_list` | `DrawCommand` / `DrawList`: immutable frame description |
//! | `frame`     | `render_world`: pure `World` → `DrawList`               |
//! | `raster`    | `Framebuffer`: CPU rasterizer for a `DrawList`          |
//!
//! `render_world` never touches the world mutably and never draws anything
//! itself, so frames can be compared and tested without a display.  Whoever
//! presents the frame (the software `Framebuffer`, a GPU upload, a test)
//! consumes the list.

pub mod draw_list;
pub mod frame;
pub mod raster;

pub use draw_list::{DrawCommand, DrawList, Rect};
pub use frame::{render_world, FrameStyle};
pub use raster::Framebuffer;

pub use pixelforge_core::Color;
