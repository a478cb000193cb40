//! Syllable decomposition over the modern Hangul block.
//!
//! A UTF-8 encoded syllable in `[0xAC00, 0xD7A3]` splits arithmetically
//! into initial/medial/final component indices (the 19×21×28 layout of the
//! block). Anything outside the block decomposes to [`Syllable::EMPTY`],
//! which downstream renders as a blank cell.

use super::bul::{chosung_bul, jongsung_bul, jungsung_bul};

/// First codepoint of the modern Hangul syllable block (가).
pub const SYLLABLE_BASE: u16 = 0xAC00;
/// Last codepoint of the block (힣).
pub const SYLLABLE_LAST: u16 = 0xD7A3;

const JUNG_COUNT: u16 = 21;
const JONG_COUNT: u16 = 28;

/// One decomposed syllable: component indices plus the selected glyph
/// variant for each component.
///
/// `jong == 0` means no final consonant. The all-zero value doubles as the
/// decomposition-failure result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant index, 0..=18.
    pub cho: u8,
    /// Medial vowel index, 0..=20.
    pub jung: u8,
    /// Final consonant index, 0..=27; 0 when absent.
    pub jong: u8,
    /// Initial glyph variant, 0..=7.
    pub cho_bul: u8,
    /// Medial glyph variant, 0..=3.
    pub jung_bul: u8,
    /// Final glyph variant, 0..=3.
    pub jong_bul: u8,
}

impl Syllable {
    /// The zero value produced when decomposition fails.
    pub const EMPTY: Syllable = Syllable {
        cho: 0,
        jung: 0,
        jong: 0,
        cho_bul: 0,
        jung_bul: 0,
        jong_bul: 0,
    };

    /// Whether the syllable carries a final consonant.
    pub fn has_jong(&self) -> bool {
        self.jong != 0
    }
}

/// Reassembles the 16-bit codepoint from a 3-byte UTF-8 sequence.
fn code_point(b0: u8, b1: u8, b2: u8) -> u16 {
    (((b0 & 0x0F) as u16) << 12) | (((b1 & 0x3F) as u16) << 6) | ((b2 & 0x3F) as u16)
}

/// Whether the 3-byte sequence encodes a modern Hangul syllable.
pub fn is_hangul(b0: u8, b1: u8, b2: u8) -> bool {
    if (b0 & 0xE0) != 0xE0 {
        return false;
    }
    let code = code_point(b0, b1, b2);
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code)
}

/// Decomposes a UTF-8 encoded syllable into components and glyph variants.
///
/// Non-Hangul input yields [`Syllable::EMPTY`].
pub fn decompose(b0: u8, b1: u8, b2: u8) -> Syllable {
    if !is_hangul(b0, b1, b2) {
        return Syllable::EMPTY;
    }

    let code = code_point(b0, b1, b2) - SYLLABLE_BASE;
    let cho = (code / (JUNG_COUNT * JONG_COUNT)) as u8;
    let jung = ((code % (JUNG_COUNT * JONG_COUNT)) / JONG_COUNT) as u8;
    let jong = (code % JONG_COUNT) as u8;

    let has_jong = jong != 0;
    Syllable {
        cho,
        jung,
        jong,
        cho_bul: chosung_bul(jung, has_jong),
        jung_bul: jungsung_bul(cho, has_jong),
        jong_bul: if has_jong { jongsung_bul(jung) } else { 0 },
    }
}
