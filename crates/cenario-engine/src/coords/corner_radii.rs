/// Per-corner radii for a rounded rectangle (logical units).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Negative values are treated as zero by the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps every radius into `[0, limit]`.
    ///
    /// `limit` is typically half the short side of the rect being rounded,
    /// so opposite corners never overlap.
    #[must_use]
    pub fn clamped(self, limit: f32) -> Self {
        let c = |r: f32| r.clamp(0.0, limit.max(0.0));
        Self {
            top_left: c(self.top_left),
            top_right: c(self.top_right),
            bottom_right: c(self.bottom_right),
            bottom_left: c(self.bottom_left),
        }
    }
}
