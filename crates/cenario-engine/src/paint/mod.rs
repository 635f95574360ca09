//! Paint model shared between the draw stream and the rasterizer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid color)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;

/// Paint source for filling geometry.
///
/// Single variant today; gradients and patterns would become new variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
        }
    }
}
