use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// One segment of a free-form outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier: control point, then end point.
    QuadTo(Vec2, Vec2),
    Close,
}

/// Free-form closed-outline draw payload.
///
/// The whole outline is filled once and stroked once as a single shape, so
/// composite outlines (a bubble body with its tail fused into the bottom
/// edge) show no seam where the pieces meet.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub verbs: Vec<PathVerb>,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl PathCmd {
    #[inline]
    pub fn new(verbs: Vec<PathVerb>, paint: Paint, border: Option<Border>) -> Self {
        Self { verbs, paint, border }
    }

    /// True when the outline ends with an explicit `Close`.
    pub fn is_closed(&self) -> bool {
        matches!(self.verbs.last(), Some(PathVerb::Close))
    }
}

impl DrawList {
    /// Records a free-form outline draw command.
    #[inline]
    pub fn push_path(
        &mut self,
        z: ZIndex,
        verbs: Vec<PathVerb>,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Path(PathCmd::new(verbs, paint, border)));
    }
}
