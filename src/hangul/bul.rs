//! Glyph-variant ("bul") selection.
//!
//! Composable bitmap fonts store several visually adjusted renderings of
//! each jamo; which one is used depends on the neighboring components of
//! the syllable. The tables here are keyed to the glyph table layout of
//! the target font format and must stay bit-for-bit as they are.

/// Initial-consonant variant when the syllable has no final consonant,
/// indexed by the medial vowel.
const CHO_BUL_PLAIN: [u8; 21] = [
    0, 0, 0, 0, 0, 0, 0, 0, // ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ
    1, 3, 3, 3, 1, // ㅗ ㅘ ㅙ ㅚ ㅛ
    2, 4, 4, 4, 2, // ㅜ ㅝ ㅞ ㅟ ㅠ
    1, 3, 0, // ㅡ ㅢ ㅣ
];

/// Initial-consonant variant when a final consonant is present.
const CHO_BUL_FINAL: [u8; 21] = [
    5, 5, 5, 5, 5, 5, 5, 5, // ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ
    6, 7, 7, 7, 6, // ㅗ ㅘ ㅙ ㅚ ㅛ
    6, 7, 7, 7, 6, // ㅜ ㅝ ㅞ ㅟ ㅠ
    6, 7, 5, // ㅡ ㅢ ㅣ
];

/// Final-consonant variant, indexed by the medial vowel above it.
const JONG_BUL: [u8; 21] = [
    0, 2, 0, 2, 1, 2, 1, 2, // ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ
    3, 0, 2, 1, 3, // ㅗ ㅘ ㅙ ㅚ ㅛ
    3, 1, 2, 1, 3, // ㅜ ㅝ ㅞ ㅟ ㅠ
    3, 1, 1, // ㅡ ㅢ ㅣ
];

/// Selects among the 8 initial-consonant variants.
///
/// `jung` values past the vowel range fall back to variant 0.
pub fn chosung_bul(jung: u8, has_jong: bool) -> u8 {
    if jung >= 21 {
        return 0;
    }
    if has_jong {
        CHO_BUL_FINAL[jung as usize]
    } else {
        CHO_BUL_PLAIN[jung as usize]
    }
}

/// Selects among the 4 medial-vowel variants.
///
/// ㄱ and ㅋ initials use the narrow vowel forms; everything else the wide
/// ones. The final consonant shifts both pairs.
pub fn jungsung_bul(cho: u8, has_jong: bool) -> u8 {
    if cho == 0 || cho == 15 {
        if has_jong {
            2
        } else {
            0
        }
    } else if has_jong {
        3
    } else {
        1
    }
}

/// Selects among the 4 final-consonant variants.
///
/// Only meaningful when a final consonant exists; `jung` values past the
/// vowel range fall back to variant 0.
pub fn jongsung_bul(jung: u8) -> u8 {
    if jung >= 21 {
        return 0;
    }
    JONG_BUL[jung as usize]
}
