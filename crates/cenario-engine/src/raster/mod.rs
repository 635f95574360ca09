//! CPU rasterizer backend.
//!
//! Consumes a recorded [`DrawList`](crate::scene::DrawList) in paint order
//! and produces a [`Surface`] (RGBA pixel buffer). Shape geometry is handed
//! to `tiny-skia`; glyph coverage comes from `fontdue` and is blended in
//! directly. The draw stream stays renderer-agnostic; this module is the
//! only place that knows about pixels.

mod backend;
mod error;
mod surface;

pub use backend::rasterize;
pub use error::RasterError;
pub use surface::Surface;
