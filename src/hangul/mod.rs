//! # Hangul Core
//!
//! Library-independent syllable processing: UTF-8 classification,
//! arithmetic decomposition of the modern syllable block, and selection of
//! the glyph variant ("bul") each component uses next to its neighbors.
//!
//! Everything here is pure and table-driven; rendering lives in
//! [`crate::render`].

pub mod bul;
pub mod decompose;
pub mod utf8;

pub use bul::{chosung_bul, jongsung_bul, jungsung_bul};
pub use decompose::{decompose, is_hangul, Syllable, SYLLABLE_BASE, SYLLABLE_LAST};
pub use utf8::{find_next_hangul, Utf8Unit, Utf8Walker};
