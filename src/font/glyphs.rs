//! Glyph addressing and bitmap views.
//!
//! A located glyph is `bytes_per_glyph` bytes at
//! `(index * variant_count + variant) * bytes_per_glyph` within its
//! section table. The locator refuses indices outside the declared table
//! grid and ranges past the table end, so a bad lookup degrades to a
//! missing component instead of a wild read.

use super::descriptor::{FontDescriptor, Section};
use super::store::ByteStore;
use crate::hangul::Syllable;

/// Read-only view of one component bitmap.
pub struct Glyph<'a, S: ByteStore + ?Sized = [u8]> {
    store: &'a S,
    offset: usize,
    row_bytes: usize,
}

impl<S: ByteStore + ?Sized> Clone for Glyph<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ByteStore + ?Sized> Copy for Glyph<'_, S> {}

impl<S: ByteStore + ?Sized> Glyph<'_, S> {
    /// Tests one pixel. Rows are packed MSB-first, leftmost pixel in the
    /// high bit.
    pub fn bit(&self, row: u8, col: u8) -> bool {
        let byte = self
            .store
            .read_byte(self.offset + row as usize * self.row_bytes + col as usize / 8);
        byte & (0x80 >> (col % 8)) != 0
    }

    /// Byte offset of this glyph within its section table.
    pub fn byte_offset(&self) -> usize {
        self.offset
    }
}

/// The up-to-three component bitmaps of one syllable cell. A `None` slot
/// contributes nothing to the composite.
pub struct GlyphSet<'a, S: ByteStore + ?Sized = [u8]> {
    pub cho: Option<Glyph<'a, S>>,
    pub jung: Option<Glyph<'a, S>>,
    pub jong: Option<Glyph<'a, S>>,
}

impl<S: ByteStore + ?Sized> Clone for GlyphSet<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ByteStore + ?Sized> Copy for GlyphSet<'_, S> {}

impl<S: ByteStore + ?Sized> GlyphSet<'_, S> {
    /// A set with every slot empty; composites to a blank cell.
    pub fn empty() -> Self {
        GlyphSet {
            cho: None,
            jung: None,
            jong: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cho.is_none() && self.jung.is_none() && self.jong.is_none()
    }
}

impl<'a, S: ByteStore + ?Sized> FontDescriptor<'a, S> {
    /// Locates one glyph bitmap within a section table.
    pub fn locate(&self, section: Section, index: u8, variant: u8) -> Option<Glyph<'a, S>> {
        if index as usize >= section.slots() || variant as usize >= section.variants() {
            return None;
        }
        let bpg = self.bytes_per_glyph();
        let table = self.table(section);
        let offset = (index as usize * section.variants() + variant as usize) * bpg;
        if offset + bpg > table.len() {
            return None;
        }
        Some(Glyph {
            store: table,
            offset,
            row_bytes: self.row_bytes(),
        })
    }

    /// Resolves a decomposed syllable to its component bitmaps. The jong
    /// slot stays empty when the syllable has no final consonant.
    pub fn glyph_set(&self, syllable: &Syllable) -> GlyphSet<'a, S> {
        GlyphSet {
            cho: self.locate(Section::Cho, syllable.cho, syllable.cho_bul),
            jung: self.locate(Section::Jung, syllable.jung, syllable.jung_bul),
            jong: if syllable.has_jong() {
                self.locate(Section::Jong, syllable.jong, syllable.jong_bul)
            } else {
                None
            },
        }
    }
}
