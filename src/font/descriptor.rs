//! Font descriptors: the binding between a renderer and three glyph
//! tables resident in read-only storage.

use core::fmt;

use thiserror::Error;

use super::layout;
use super::store::ByteStore;

/// Component table sections of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Cho,
    Jung,
    Jong,
}

impl Section {
    pub fn slots(self) -> usize {
        match self {
            Section::Cho => layout::CHO_SLOTS,
            Section::Jung => layout::JUNG_SLOTS,
            Section::Jong => layout::JONG_SLOTS,
        }
    }

    pub fn variants(self) -> usize {
        match self {
            Section::Cho => layout::CHO_VARIANTS,
            Section::Jung => layout::JUNG_VARIANTS,
            Section::Jong => layout::JONG_VARIANTS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Cho => f.write_str("cho"),
            Section::Jung => f.write_str("jung"),
            Section::Jong => f.write_str("jong"),
        }
    }
}

/// Descriptor validation failure. Rendering never errors; this only
/// surfaces at font-binding time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("{section} table holds {actual} bytes, expected {expected}")]
    TableSize {
        section: Section,
        expected: usize,
        actual: usize,
    },
    #[error("contiguous font data holds {actual} bytes, expected {expected}")]
    BlobSize { expected: usize, actual: usize },
}

/// A bound font: cell geometry plus non-owning views of the three glyph
/// tables. Table data is never mutated and normally lives for the whole
/// program, so descriptors are plain `Copy` values.
///
/// `S` is the storage the tables sit in. Plain byte slices (the default)
/// cover ordinary memory and memory-mapped flash; storage with a special
/// access path supplies its own [`ByteStore`].
pub struct FontDescriptor<'a, S: ByteStore + ?Sized = [u8]> {
    pub name: &'a str,
    pub glyph_width: u8,
    pub glyph_height: u8,
    /// Whether the font ships Latin glyphs as well. Advisory for hosts;
    /// this renderer reserves ASCII space without drawing either way.
    pub has_ascii: bool,
    pub cho: &'a S,
    pub jung: &'a S,
    pub jong: &'a S,
}

impl<S: ByteStore + ?Sized> Clone for FontDescriptor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ByteStore + ?Sized> Copy for FontDescriptor<'_, S> {}

impl<S: ByteStore + ?Sized> fmt::Debug for FontDescriptor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontDescriptor")
            .field("name", &self.name)
            .field("glyph_width", &self.glyph_width)
            .field("glyph_height", &self.glyph_height)
            .field("has_ascii", &self.has_ascii)
            .finish()
    }
}

impl<'a, S: ByteStore + ?Sized> FontDescriptor<'a, S> {
    pub fn new(
        name: &'a str,
        glyph_width: u8,
        glyph_height: u8,
        has_ascii: bool,
        cho: &'a S,
        jung: &'a S,
        jong: &'a S,
    ) -> Self {
        FontDescriptor {
            name,
            glyph_width,
            glyph_height,
            has_ascii,
            cho,
            jung,
            jong,
        }
    }

    pub fn row_bytes(&self) -> usize {
        layout::row_bytes(self.glyph_width)
    }

    pub fn bytes_per_glyph(&self) -> usize {
        layout::bytes_per_glyph(self.glyph_width, self.glyph_height)
    }

    pub(crate) fn table(&self, section: Section) -> &'a S {
        match section {
            Section::Cho => self.cho,
            Section::Jung => self.jung,
            Section::Jong => self.jong,
        }
    }

    /// Checks that every table covers its declared slot/variant grid.
    pub fn validate(&self) -> Result<(), FontError> {
        let bpg = self.bytes_per_glyph();
        for section in [Section::Cho, Section::Jung, Section::Jong] {
            let expected = section.slots() * section.variants() * bpg;
            let actual = self.table(section).len();
            if actual != expected {
                return Err(FontError::TableSize {
                    section,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl<'a> FontDescriptor<'a> {
    /// Splits a packed 360-glyph blob (cho, jung, jong sections
    /// back-to-back, the layout the font conversion pipeline emits) into a
    /// descriptor over its three sections.
    pub fn from_contiguous(
        name: &'a str,
        glyph_width: u8,
        glyph_height: u8,
        has_ascii: bool,
        blob: &'a [u8],
    ) -> Result<Self, FontError> {
        let bpg = layout::bytes_per_glyph(glyph_width, glyph_height);
        let expected = layout::TOTAL_GLYPHS * bpg;
        if blob.len() != expected {
            return Err(FontError::BlobSize {
                expected,
                actual: blob.len(),
            });
        }

        let jung_start = layout::JUNG_GLYPH_OFFSET * bpg;
        let jong_start = layout::JONG_GLYPH_OFFSET * bpg;
        Ok(FontDescriptor {
            name,
            glyph_width,
            glyph_height,
            has_ascii,
            cho: &blob[..jung_start],
            jung: &blob[jung_start..jong_start],
            jong: &blob[jong_start..],
        })
    }
}
