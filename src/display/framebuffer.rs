//! In-memory RGB565 framebuffer using embedded-graphics.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use spin::Mutex;

use super::sink::PixelSink;

/// A pixel surface over a caller-provided `u16` buffer. Doubles as a
/// [`PixelSink`] for the renderer and a `DrawTarget` for anything built on
/// embedded-graphics.
pub struct Framebuffer<'a> {
    buf: &'a mut [u16],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl<'a> Framebuffer<'a> {
    /// The buffer must hold at least `width * height` pixels; rows are
    /// `width` pixels apart.
    pub fn new(buf: &'a mut [u16], width: usize, height: usize) -> Self {
        Framebuffer {
            buf,
            width,
            height,
            stride: width,
        }
    }

    /// Fill entire surface with a color
    pub fn clear(&mut self, color: Rgb565) {
        let rect = Rectangle::new(
            Point::zero(),
            Size::new(self.width as u32, self.height as u32),
        );
        rect.into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
            .ok();
    }

    /// Fill a rectangular region
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb565) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height));
        rect.into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
            .ok();
    }

    /// Raw pixel value at (x, y), if inside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.buf.get(y * self.stride + x).copied()
    }

    fn set_raw(&mut self, x: i16, y: i16, value: u16) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let offset = y as usize * self.stride + x as usize;
        if let Some(p) = self.buf.get_mut(offset) {
            *p = value;
        }
    }
}

impl PixelSink for Framebuffer<'_> {
    fn draw_pixel(&mut self, x: i16, y: i16, color: u16) {
        self.set_raw(x, y, color);
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            let offset = y as usize * self.stride + x as usize;
            if let Some(p) = self.buf.get_mut(offset) {
                *p = color.into_storage();
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

pub static DISPLAY: Mutex<Option<Framebuffer<'static>>> = Mutex::new(None);

pub fn init_display(buf: &'static mut [u16], width: usize, height: usize) {
    *DISPLAY.lock() = Some(Framebuffer::new(buf, width, height));
}
