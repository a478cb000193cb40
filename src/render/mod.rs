//! # Renderer
//!
//! Immediate-mode Hangul rendering: a [`HangulDisplay`] walks UTF-8
//! input, decomposes each syllable, picks the glyph variants its
//! neighbors demand, and OR-composites the component bitmaps into one
//! cell through the pixel sink, advancing the cursor after each cell.
//!
//! Until a font is bound, every print call is a silent no-op. Non-Hangul
//! 3-byte sequences render as a blank cell that still advances the
//! cursor; ASCII reserves a fixed 8 columns without drawing (Latin glyph
//! rendering is a host concern).

mod raster;

use crate::display::PixelSink;
use crate::font::{ByteStore, FontDescriptor, FontError, GlyphSet};
use crate::hangul::{decompose, is_hangul, Utf8Unit, Utf8Walker};

/// Columns reserved for an ASCII byte, unscaled by the size mode.
pub const ASCII_ADVANCE: i16 = 8;

/// Cell scaling mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSize {
    #[default]
    Normal,
    DoubleWidth,
    DoubleHeight,
    DoubleBoth,
}

impl TextSize {
    pub fn scale_x(self) -> i16 {
        match self {
            TextSize::DoubleWidth | TextSize::DoubleBoth => 2,
            _ => 1,
        }
    }

    pub fn scale_y(self) -> i16 {
        match self {
            TextSize::DoubleHeight | TextSize::DoubleBoth => 2,
            _ => 1,
        }
    }
}

/// Text color, resolved to the `u16` handed to the sink once per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextColor {
    #[default]
    Black,
    White,
    Invert,
    /// Passed through untranslated, for sinks that take device colors
    /// (RGB565 and the like) directly.
    Raw(u16),
}

impl TextColor {
    pub fn resolve(self) -> u16 {
        match self {
            TextColor::Black => 0,
            TextColor::White => 1,
            TextColor::Invert => 2,
            TextColor::Raw(value) => value,
        }
    }
}

/// The renderer: pen position, text style, bound font, and the sink it
/// draws through. One instance per surface, single-threaded by design.
///
/// `T` is the glyph table storage of the bound font, plain byte slices
/// unless the platform needs a special [`ByteStore`].
pub struct HangulDisplay<'f, S: PixelSink, T: ByteStore + ?Sized = [u8]> {
    sink: S,
    font: Option<FontDescriptor<'f, T>>,
    cursor_x: i16,
    cursor_y: i16,
    size: TextSize,
    color: TextColor,
}

impl<'f, S: PixelSink, T: ByteStore + ?Sized> HangulDisplay<'f, S, T> {
    pub fn new(sink: S) -> Self {
        HangulDisplay {
            sink,
            font: None,
            cursor_x: 0,
            cursor_y: 0,
            size: TextSize::Normal,
            color: TextColor::Black,
        }
    }

    /// Binds a font after validating its tables. Printing stays a no-op
    /// until this succeeds.
    pub fn set_font(&mut self, font: FontDescriptor<'f, T>) -> Result<(), FontError> {
        font.validate()?;
        log::debug!(
            "font {} bound ({}x{} cells)",
            font.name,
            font.glyph_width,
            font.glyph_height
        );
        self.font = Some(font);
        Ok(())
    }

    pub fn font(&self) -> Option<&FontDescriptor<'f, T>> {
        self.font.as_ref()
    }

    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn set_text_size(&mut self, size: TextSize) {
        self.size = size;
    }

    pub fn set_text_color(&mut self, color: TextColor) {
        self.color = color;
    }

    pub fn cursor_x(&self) -> i16 {
        self.cursor_x
    }

    pub fn cursor_y(&self) -> i16 {
        self.cursor_y
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders a UTF-8 string at the cursor. Line breaks are the caller's
    /// business; the cursor only ever moves right.
    pub fn print(&mut self, text: &str) {
        self.print_bytes(text.as_bytes());
    }

    /// [`print`](Self::print) over raw bytes: walks until the end of the
    /// slice, a NUL byte, or a truncated trailing sequence.
    pub fn print_bytes(&mut self, bytes: &[u8]) {
        if self.font.is_none() {
            log::trace!("print dropped, no font bound");
            return;
        }
        for unit in Utf8Walker::new(bytes) {
            match unit {
                Utf8Unit::Ascii(_) => self.cursor_x += ASCII_ADVANCE,
                Utf8Unit::Skip(_) => {}
                Utf8Unit::Triple(b0, b1, b2) => self.print_syllable(b0, b1, b2),
            }
        }
    }

    /// Cursor+color convenience wrapper around [`print`](Self::print).
    pub fn print_at(&mut self, x: i16, y: i16, text: &str, color: TextColor) {
        self.set_cursor(x, y);
        self.set_text_color(color);
        self.print(text);
    }

    /// Renders one 3-byte sequence as a syllable cell and advances the
    /// cursor by one cell width. Non-Hangul input gives a blank cell.
    pub fn print_syllable(&mut self, b0: u8, b1: u8, b2: u8) {
        let Some(font) = self.font else {
            return;
        };
        let glyphs = if is_hangul(b0, b1, b2) {
            font.glyph_set(&decompose(b0, b1, b2))
        } else {
            log::trace!("non-hangul sequence {b0:02X} {b1:02X} {b2:02X}, blank cell");
            GlyphSet::empty()
        };

        raster::composite(
            &mut self.sink,
            &glyphs,
            self.cursor_x,
            self.cursor_y,
            font.glyph_width,
            font.glyph_height,
            self.size.scale_x(),
            self.size.scale_y(),
            self.color.resolve(),
        );
        self.cursor_x += font.glyph_width as i16 * self.size.scale_x();
    }

    /// Draws a raw MSB-first packed bitmap at (x, y), scaled like glyph
    /// cells. The escape hatch for non-Hangul artwork; does not touch the
    /// cursor.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, data: &[u8], width: u16, height: u16, color: u16) {
        raster::blit(
            &mut self.sink,
            data,
            x,
            y,
            width,
            height,
            self.size.scale_x(),
            self.size.scale_y(),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::layout::{
        CHO_VARIANTS, JONG_VARIANTS, JUNG_VARIANTS, CHO_SLOTS, JONG_SLOTS, JUNG_SLOTS,
    };
    use pretty_assertions::assert_eq;

    const BPG: usize = 32;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(i16, i16, u16)>,
    }

    impl PixelSink for Recorder {
        fn draw_pixel(&mut self, x: i16, y: i16, color: u16) {
            self.calls.push((x, y, color));
        }
    }

    struct Tables {
        cho: Vec<u8>,
        jung: Vec<u8>,
        jong: Vec<u8>,
    }

    fn blank_tables() -> Tables {
        Tables {
            cho: vec![0; CHO_SLOTS * CHO_VARIANTS * BPG],
            jung: vec![0; JUNG_SLOTS * JUNG_VARIANTS * BPG],
            jong: vec![0; JONG_SLOTS * JONG_VARIANTS * BPG],
        }
    }

    /// Pokes 16-bit rows into the glyph at (index, variant).
    fn set_glyph(table: &mut [u8], variants: usize, index: usize, variant: usize, rows: &[(usize, u16)]) {
        let base = (index * variants + variant) * BPG;
        for &(row, bits) in rows {
            table[base + row * 2] = (bits >> 8) as u8;
            table[base + row * 2 + 1] = bits as u8;
        }
    }

    fn display(tables: &Tables) -> HangulDisplay<'_, Recorder> {
        let mut disp = HangulDisplay::new(Recorder::default());
        let font = FontDescriptor::new(
            "fixture",
            16,
            16,
            false,
            &tables.cho[..],
            &tables.jung[..],
            &tables.jong[..],
        );
        disp.set_font(font).unwrap();
        disp
    }

    #[test]
    fn ga_composites_cho_and_jung_only() {
        let mut tables = blank_tables();
        // 가: cho[0][0] and jung[0][0].
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0x8000)]);
        set_glyph(&mut tables.jung, JUNG_VARIANTS, 0, 0, &[(1, 0x0001)]);
        // Noise in the jong table must stay invisible (no final consonant).
        set_glyph(&mut tables.jong, JONG_VARIANTS, 0, 0, &[(2, 0xFFFF)]);

        let mut disp = display(&tables);
        disp.print("가");

        assert_eq!(disp.sink().calls, [(0, 0, 0), (15, 1, 0)]);
        assert_eq!(disp.cursor_x(), 16);
        assert_eq!(disp.cursor_y(), 0);
    }

    #[test]
    fn overlapping_components_emit_one_call_per_pixel() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(3, 0x8000)]);
        set_glyph(&mut tables.jung, JUNG_VARIANTS, 0, 0, &[(3, 0x8000)]);

        let mut disp = display(&tables);
        disp.print("가");

        assert_eq!(disp.sink().calls, [(0, 3, 0)]);
    }

    #[test]
    fn syllable_with_final_composites_three_glyphs() {
        let mut tables = blank_tables();
        // 한 (U+D55C): cho 18 bul 5, jung 0 bul 3, jong 4 bul 0.
        set_glyph(&mut tables.cho, CHO_VARIANTS, 18, 5, &[(0, 0x8000)]);
        set_glyph(&mut tables.jung, JUNG_VARIANTS, 0, 3, &[(7, 0x0100)]);
        set_glyph(&mut tables.jong, JONG_VARIANTS, 4, 0, &[(15, 0x0001)]);

        let mut disp = display(&tables);
        disp.print("한");

        assert_eq!(disp.sink().calls, [(0, 0, 0), (7, 7, 0), (15, 15, 0)]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0xA5A5), (9, 0x0110)]);
        set_glyph(&mut tables.jung, JUNG_VARIANTS, 0, 0, &[(12, 0x8001)]);

        let mut disp = display(&tables);
        disp.print("가");
        let first = disp.sink().calls.clone();

        disp.set_cursor(0, 0);
        disp.print("가");
        let second = disp.sink().calls[first.len()..].to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn cursor_advance_law_across_size_modes() {
        let tables = blank_tables();
        let cases = [
            (TextSize::Normal, 16),
            (TextSize::DoubleWidth, 32),
            (TextSize::DoubleHeight, 16),
            (TextSize::DoubleBoth, 32),
        ];
        for (size, advance) in cases {
            let mut disp = display(&tables);
            disp.set_cursor(5, 9);
            disp.set_text_size(size);
            disp.print("가");
            assert_eq!(disp.cursor_x(), 5 + advance, "{size:?}");
            assert_eq!(disp.cursor_y(), 9, "{size:?}");
        }
    }

    #[test]
    fn double_both_scales_each_pixel_to_a_quad() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(2, 0x4000)]);

        let mut disp = display(&tables);
        disp.set_text_size(TextSize::DoubleBoth);
        disp.print("가");

        // Pixel (col 1, row 2) → origin (2, 4), expanded 2×2.
        assert_eq!(disp.sink().calls, [(2, 4, 0), (3, 4, 0), (2, 5, 0), (3, 5, 0)]);
    }

    #[test]
    fn color_resolution_per_mode() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0x8000)]);

        let cases = [
            (TextColor::Black, 0u16),
            (TextColor::White, 1),
            (TextColor::Invert, 2),
            (TextColor::Raw(0xF800), 0xF800),
        ];
        for (mode, resolved) in cases {
            let mut disp = display(&tables);
            disp.set_text_color(mode);
            disp.print("가");
            assert_eq!(disp.sink().calls, [(0, 0, resolved)], "{mode:?}");
        }
    }

    #[test]
    fn truncated_tail_draws_nothing_and_keeps_cursor() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0xFFFF)]);

        let mut disp = display(&tables);
        disp.print_bytes(&[0xEA, 0xB0]);

        assert!(disp.sink().calls.is_empty());
        assert_eq!(disp.cursor_x(), 0);
    }

    #[test]
    fn mixed_ascii_and_syllable_advances() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0x8000)]);

        let mut disp = display(&tables);
        disp.print("A가");

        // ASCII reserves 8 columns without drawing; the syllable renders
        // shifted by that reservation and advances a full cell.
        assert_eq!(disp.sink().calls, [(8, 0, 0)]);
        assert_eq!(disp.cursor_x(), 8 + 16);
    }

    #[test]
    fn unbound_font_makes_print_a_no_op() {
        let mut disp: HangulDisplay<'_, Recorder> = HangulDisplay::new(Recorder::default());
        disp.print("가나다");
        disp.print_syllable(0xEA, 0xB0, 0x80);

        assert!(disp.sink().calls.is_empty());
        assert_eq!(disp.cursor_x(), 0);
    }

    #[test]
    fn non_hangul_triple_renders_blank_and_advances() {
        let mut tables = blank_tables();
        // Even slot-0 glyph data must not leak into the blank cell.
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0xFFFF)]);
        set_glyph(&mut tables.jung, JUNG_VARIANTS, 0, 0, &[(1, 0xFFFF)]);

        let mut disp = display(&tables);
        disp.print("中");

        assert!(disp.sink().calls.is_empty());
        assert_eq!(disp.cursor_x(), 16);
    }

    #[test]
    fn empty_input_returns_immediately() {
        let tables = blank_tables();
        let mut disp = display(&tables);
        disp.print("");
        disp.print_bytes(&[]);
        assert!(disp.sink().calls.is_empty());
        assert_eq!(disp.cursor_x(), 0);
    }

    #[test]
    fn print_at_positions_and_colors() {
        let mut tables = blank_tables();
        set_glyph(&mut tables.cho, CHO_VARIANTS, 0, 0, &[(0, 0x8000)]);

        let mut disp = display(&tables);
        disp.print_at(100, 50, "가", TextColor::White);

        assert_eq!(disp.sink().calls, [(100, 50, 1)]);
        assert_eq!(disp.cursor_x(), 116);
        assert_eq!(disp.cursor_y(), 50);
    }

    #[test]
    fn invalid_font_is_rejected_and_stays_unbound() {
        let tables = blank_tables();
        let mut disp: HangulDisplay<'_, Recorder> = HangulDisplay::new(Recorder::default());
        let font = FontDescriptor::new(
            "broken",
            16,
            16,
            false,
            &tables.cho[..100],
            &tables.jung[..],
            &tables.jong[..],
        );
        assert!(disp.set_font(font).is_err());
        assert!(disp.font().is_none());

        disp.print("가");
        assert!(disp.sink().calls.is_empty());
    }

    #[test]
    fn draw_bitmap_blits_msb_first_with_scaling() {
        let tables = blank_tables();
        let mut disp = display(&tables);

        // 8×2 bitmap: row 0 = 1000_0001, row 1 = 0100_0000.
        let bitmap = [0x81u8, 0x40];
        disp.draw_bitmap(10, 20, &bitmap, 8, 2, 0x07E0);
        assert_eq!(
            disp.sink().calls,
            [(10, 20, 0x07E0), (17, 20, 0x07E0), (11, 21, 0x07E0)]
        );

        let before = disp.sink().calls.len();
        disp.set_text_size(TextSize::DoubleWidth);
        disp.draw_bitmap(0, 0, &[0x80], 8, 1, 1);
        assert_eq!(disp.sink().calls[before..], [(0, 0, 1), (1, 0, 1)]);
        // Blitting never moves the pen.
        assert_eq!(disp.cursor_x(), 0);
    }
}
