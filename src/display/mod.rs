//! # Display Module
//!
//! The boundary between the renderer and real pixels: the [`PixelSink`]
//! capability, an in-memory framebuffer surface, and an adapter onto any
//! embedded-graphics `DrawTarget`.

pub mod framebuffer;
pub mod sink;
pub mod target;

pub use framebuffer::{init_display, Framebuffer, DISPLAY};
pub use sink::PixelSink;
pub use target::TargetSink;
