//! Coordinate and geometry types shared between the draw stream, the
//! rasterizer, and the stage layer.
//!
//! Canonical space:
//! - Logical units (one unit = one output pixel at 1× scale)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
