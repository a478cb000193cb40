//! # Font Module
//!
//! Everything about where glyph bytes live: the read-only byte store
//! capability, the table layout of the composable font format, font
//! descriptors with binding-time validation, and the glyph locator.
//!
//! Font data itself is produced by an external conversion pipeline and
//! bound at runtime as a [`FontDescriptor`]; this crate ships none.

pub mod descriptor;
pub mod glyphs;
pub mod layout;
pub mod store;

pub use descriptor::{FontDescriptor, FontError, Section};
pub use glyphs::{Glyph, GlyphSet};
pub use store::ByteStore;
