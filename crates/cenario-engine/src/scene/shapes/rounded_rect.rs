use crate::coords::{CornerRadii, Rect};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, paint: Paint, border: Option<Border>) -> Self {
        Self { rect, radii, paint, border }
    }
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    ///
    /// Radii are clamped to half the rect's short side so opposite corners
    /// never overlap (the same guard the canvas-era code applied by hand).
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        let limit = rect.size.x.min(rect.size.y) * 0.5;
        let radii = radii.clamped(limit);
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, paint, border)));
    }

    /// Records a white-filled rounded rectangle with a uniform radius and a
    /// colored stroke, the body shape of every bubble variant.
    #[inline]
    pub fn push_outlined_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        fill: Color,
        border: Border,
    ) {
        self.push_rounded_rect(z, rect, CornerRadii::all(radius), Paint::solid(fill), Some(border));
    }
}
