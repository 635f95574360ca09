//! Speech/thought bubble rendering.
//!
//! The pipeline is three pure stages plus a raster step:
//!
//! 1. [`layout`]: greedy word wrap and size computation
//! 2. [`build`]: bubble geometry and text as a draw-command stream
//! 3. rasterize + PNG encode via the engine backend
//!
//! Each stage is independently testable; the draw stream keeps the shape
//! algorithm free of any graphics context.

mod layout;
mod render;
mod shape;
mod style;

pub use layout::{layout, BubbleLayout};
pub use render::{BubbleRaster, BubbleRenderer};
pub use shape::build;
pub use style::{BubbleStyle, ShapeKind, TailAnchor};

#[cfg(test)]
pub(crate) mod test_util {
    use cenario_engine::text::TextMeasure;

    use super::metrics;

    /// Deterministic measurer: every character advances 10 units at size 24,
    /// scaled proportionally for other sizes.
    pub(crate) struct FixedAdvance;

    impl TextMeasure for FixedAdvance {
        fn line_width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * 10.0 * (size / metrics::FONT_SIZE)
        }
    }
}

pub(crate) mod metrics {
    //! Fixed bubble metrics, in logical units.

    /// Text size for bubble body lines.
    pub const FONT_SIZE: f32 = 24.0;
    /// Text size inside the name badge.
    pub const NAME_FONT_SIZE: f32 = 16.0;
    /// Inner padding between body edge and text, each side.
    pub const PADDING: f32 = 20.0;
    /// Vertical advance per wrapped line.
    pub const LINE_HEIGHT: f32 = 30.0;
    /// Greedy wrap threshold for line widths.
    pub const WRAP_WIDTH: f32 = 300.0;
    /// Vertical reach of the tail below the body.
    pub const TAIL_HEIGHT: f32 = 25.0;
    /// Stroke thickness of the bubble outline.
    pub const BORDER_THICKNESS: f32 = 4.0;
    /// Bodies never get narrower than this.
    pub const MIN_BUBBLE_WIDTH: f32 = 120.0;
    /// Outer margin on the left/top so strokes never clip.
    pub const OUTER_MARGIN: f32 = 10.0;
    /// Extra canvas allowance beyond the body (right + bottom buffer).
    pub const EXTRA_BUFFER: f32 = 20.0;
    /// Canvas height reserved for the name badge when present.
    pub const NAME_ALLOWANCE: f32 = 32.0;
    /// How far the body shifts down when a name badge straddles its top edge.
    pub const NAME_TOP_SHIFT: f32 = 16.0;

    /// Corner radius of the thought-bubble body.
    pub const THOUGHT_RADIUS: f32 = 30.0;
    /// Corner radius of the speech-bubble body.
    pub const SPEECH_RADIUS: f32 = 15.0;
    /// Corner radius of the name badge.
    pub const NAME_BADGE_RADIUS: f32 = 10.0;
    /// Name badge height; it is vertically centered on the body's top edge.
    pub const NAME_BADGE_HEIGHT: f32 = 30.0;
    /// Horizontal padding added around the measured name (total).
    pub const NAME_BADGE_PAD: f32 = 30.0;
    /// Badge inset from the body's left edge.
    pub const NAME_BADGE_INSET: f32 = 15.0;
    /// White contrast stroke around the badge.
    pub const NAME_BADGE_STROKE: f32 = 2.0;

    /// Half of the speech tail's base span on the bottom edge.
    pub const TAIL_HALF_WIDTH: f32 = 15.0;
    /// Sideways offset of the tail tip for left/right anchors.
    pub const TAIL_TIP_OFFSET: f32 = 15.0;
    /// The tail base keeps this distance from the rounded corners,
    /// in addition to the corner radius itself.
    pub const TAIL_CORNER_CLEARANCE: f32 = 20.0;
    /// How far tail-side control points pull inward from the base corners.
    pub const TAIL_CURVE_PULL: f32 = 5.0;
    /// Tail-side control points sit at this fraction of the tail height.
    pub const TAIL_CURVE_DEPTH: f32 = 0.6;

    /// Radius of the larger thought-trail circle.
    pub const THOUGHT_CIRCLE_BIG: f32 = 8.0;
    /// Radius of the smaller thought-trail circle.
    pub const THOUGHT_CIRCLE_SMALL: f32 = 5.0;
    /// Center offset of the big circle below the body.
    pub const THOUGHT_CIRCLE_BIG_DROP: f32 = 8.0;
    /// Center offset of the small circle below the body.
    pub const THOUGHT_CIRCLE_SMALL_DROP: f32 = 22.0;
    /// Sideways drift of the small circle for left/right anchors.
    pub const THOUGHT_CIRCLE_DRIFT: f32 = 10.0;
}
