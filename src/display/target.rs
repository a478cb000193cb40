//! Adapter from the pixel-sink capability onto any embedded-graphics
//! `DrawTarget`, so the renderer can drive whichever display driver the
//! host already uses.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::Point;
use embedded_graphics_core::Pixel;

use super::sink::PixelSink;

/// Routes pixel-draw calls into `target`, translating the renderer's raw
/// `u16` color through `map`. Draw errors are swallowed; a target that can
/// fail reports through its own channels.
pub struct TargetSink<'a, D, F>
where
    D: DrawTarget,
    F: Fn(u16) -> D::Color,
{
    target: &'a mut D,
    map: F,
}

impl<'a, D, F> TargetSink<'a, D, F>
where
    D: DrawTarget,
    F: Fn(u16) -> D::Color,
{
    pub fn new(target: &'a mut D, map: F) -> Self {
        TargetSink { target, map }
    }
}

impl<D, F> PixelSink for TargetSink<'_, D, F>
where
    D: DrawTarget,
    F: Fn(u16) -> D::Color,
{
    fn draw_pixel(&mut self, x: i16, y: i16, color: u16) {
        let pixel = Pixel(Point::new(x as i32, y as i32), (self.map)(color));
        self.target.draw_iter(core::iter::once(pixel)).ok();
    }
}
