//! Cell compositing and raw bitmap blitting.

use crate::display::PixelSink;
use crate::font::{ByteStore, GlyphSet};

/// OR-composites up to three component bitmaps into one cell and emits a
/// draw call per lit output pixel. Row-major, top-to-bottom,
/// left-to-right; `color` was resolved once by the caller.
pub(crate) fn composite<S: PixelSink, T: ByteStore + ?Sized>(
    sink: &mut S,
    glyphs: &GlyphSet<'_, T>,
    x: i16,
    y: i16,
    width: u8,
    height: u8,
    scale_x: i16,
    scale_y: i16,
    color: u16,
) {
    if glyphs.is_empty() {
        return;
    }
    for row in 0..height {
        for col in 0..width {
            let on = glyphs.cho.is_some_and(|g| g.bit(row, col))
                || glyphs.jung.is_some_and(|g| g.bit(row, col))
                || glyphs.jong.is_some_and(|g| g.bit(row, col));
            if on {
                emit_scaled(sink, x, y, row as i16, col as i16, scale_x, scale_y, color);
            }
        }
    }
}

/// Draws an MSB-first packed bitmap (`ceil(width / 8)` bytes per row) with
/// the same scaling rules glyph cells use. Rows past the end of `data`
/// read as blank.
pub(crate) fn blit<S: PixelSink>(
    sink: &mut S,
    data: &[u8],
    x: i16,
    y: i16,
    width: u16,
    height: u16,
    scale_x: i16,
    scale_y: i16,
    color: u16,
) {
    let row_bytes = (width as usize + 7) / 8;
    for row in 0..height {
        for col in 0..width {
            let byte = data
                .get(row as usize * row_bytes + col as usize / 8)
                .copied()
                .unwrap_or(0);
            if byte & (0x80 >> (col % 8)) != 0 {
                emit_scaled(sink, x, y, row as i16, col as i16, scale_x, scale_y, color);
            }
        }
    }
}

fn emit_scaled<S: PixelSink>(
    sink: &mut S,
    x: i16,
    y: i16,
    row: i16,
    col: i16,
    scale_x: i16,
    scale_y: i16,
    color: u16,
) {
    for sy in 0..scale_y {
        for sx in 0..scale_x {
            sink.draw_pixel(x + col * scale_x + sx, y + row * scale_y + sy, color);
        }
    }
}
