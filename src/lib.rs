//! Composable Hangul bitmap rendering for pixel-addressable displays.
//!
//! Each modern Hangul syllable is decomposed into its initial/medial/final
//! components (cho/jung/jong), the glyph variant of each component is
//! selected from its neighbors, and the component bitmaps are
//! OR-composited into one fixed-size cell through a pixel-draw callback.
//! Any display that can set a pixel can render Korean text this way; the
//! font is a set of flat byte tables bound at runtime.
//!
//! ```no_run
//! use hangul_disp::{FontDescriptor, HangulDisplay, TextColor};
//!
//! static CHO: [u8; 20 * 8 * 32] = [0; 20 * 8 * 32];
//! static JUNG: [u8; 22 * 4 * 32] = [0; 22 * 4 * 32];
//! static JONG: [u8; 28 * 4 * 32] = [0; 28 * 4 * 32];
//!
//! let mut hangul = HangulDisplay::new(|x: i16, y: i16, color: u16| {
//!     // forward to the display driver, e.g. tft.draw_pixel(x, y, color)
//!     let _ = (x, y, color);
//! });
//! hangul
//!     .set_font(FontDescriptor::new("H01", 16, 16, false, &CHO[..], &JUNG[..], &JONG[..]))
//!     .unwrap();
//! hangul.set_cursor(10, 30);
//! hangul.set_text_color(TextColor::White);
//! hangul.print("안녕하세요!");
//! ```

#![cfg_attr(not(test), no_std)]

pub mod display;
pub mod font;
pub mod hangul;
pub mod render;

pub use display::{init_display, Framebuffer, PixelSink, TargetSink, DISPLAY};
pub use font::{ByteStore, FontDescriptor, FontError, GlyphSet, Section};
pub use hangul::{decompose, find_next_hangul, is_hangul, Syllable, Utf8Unit, Utf8Walker};
pub use render::{HangulDisplay, TextColor, TextSize, ASCII_ADVANCE};
