//! Glyph table layout of the composable font format.
//!
//! Each component table is a flat array ordered
//! `[componentIndex][variantIndex][byteInGlyph]`. Slot counts include the
//! format's reserved slots (slot 0 of cho, slots 0–1 of jung, slot 0 of
//! jong); decomposed component indices address the tables directly.

pub const CHO_SLOTS: usize = 20;
pub const CHO_VARIANTS: usize = 8;
pub const JUNG_SLOTS: usize = 22;
pub const JUNG_VARIANTS: usize = 4;
pub const JONG_SLOTS: usize = 28;
pub const JONG_VARIANTS: usize = 4;

/// Glyphs per section.
pub const CHO_GLYPHS: usize = CHO_SLOTS * CHO_VARIANTS; // 160
pub const JUNG_GLYPHS: usize = JUNG_SLOTS * JUNG_VARIANTS; // 88
pub const JONG_GLYPHS: usize = JONG_SLOTS * JONG_VARIANTS; // 112

/// Section start offsets (in glyphs) within a contiguous font blob.
pub const JUNG_GLYPH_OFFSET: usize = CHO_GLYPHS; // 160
pub const JONG_GLYPH_OFFSET: usize = CHO_GLYPHS + JUNG_GLYPHS; // 248

/// Glyphs in a complete font.
pub const TOTAL_GLYPHS: usize = CHO_GLYPHS + JUNG_GLYPHS + JONG_GLYPHS; // 360

/// Bytes per packed bitmap row, MSB = leftmost pixel.
pub const fn row_bytes(glyph_width: u8) -> usize {
    (glyph_width as usize + 7) / 8
}

/// Bytes per glyph bitmap (32 for the reference 16×16 format).
pub const fn bytes_per_glyph(glyph_width: u8, glyph_height: u8) -> usize {
    glyph_height as usize * row_bytes(glyph_width)
}
