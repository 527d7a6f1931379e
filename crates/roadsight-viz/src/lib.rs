//! `roadsight-viz` – pixel buffers and colors for detection overlays.
//!
//! The rendering collaborator of the perception crates: an owned RGB24
//! [`ImageCanvas`][canvas::ImageCanvas] that detection records draw onto,
//! and the [`ColorMap`][color::ColorMap] that assigns each detection label a
//! stable color.
//!
//! Drawing is plain in-place pixel mutation with no internal locking;
//! callers that share one canvas across threads serialize their draws.

pub mod canvas;
pub mod color;

pub use canvas::{ImageCanvas, TextAnnotation};
pub use color::{Color, ColorMap};
