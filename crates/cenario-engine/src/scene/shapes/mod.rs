pub(crate) mod circle;
pub(crate) mod path;
pub(crate) mod rounded_rect;
pub(crate) mod text;

use crate::paint::Color;

pub use circle::CircleCmd;
pub use path::{PathCmd, PathVerb};
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
