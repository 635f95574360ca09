use cenario_engine::paint::Color;

/// Body outline of the bubble.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeKind {
    /// Rounded rectangle with a triangular tail fused into the bottom edge.
    Speech,
    /// Cloud-style rounded rectangle with a trail of detached circles.
    Thought,
}

/// Horizontal placement of the tail relative to the body.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TailAnchor {
    Left,
    Center,
    Right,
}

impl TailAnchor {
    /// Fraction of the body width where the tail attaches.
    #[inline]
    pub fn fraction(self) -> f32 {
        match self {
            TailAnchor::Left => 0.25,
            TailAnchor::Center => 0.5,
            TailAnchor::Right => 0.75,
        }
    }

    /// Sideways direction sign: -1 for left, 0 for center, +1 for right.
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            TailAnchor::Left => -1.0,
            TailAnchor::Center => 0.0,
            TailAnchor::Right => 1.0,
        }
    }
}

/// Immutable input to the bubble renderer.
///
/// Edits create a new style value; nothing mutates in place, so a rendered
/// raster is always a deterministic function of one `BubbleStyle`.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleStyle {
    pub text: String,
    /// Empty (after trim) means no name badge.
    pub speaker_name: String,
    pub border_color: Color,
    pub shape: ShapeKind,
    pub tail: TailAnchor,
}

impl BubbleStyle {
    pub fn new(
        text: impl Into<String>,
        speaker_name: impl Into<String>,
        border_color: Color,
        shape: ShapeKind,
        tail: TailAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            speaker_name: speaker_name.into(),
            border_color,
            shape,
            tail,
        }
    }

    /// True when the style carries a speaker name worth a badge.
    #[inline]
    pub fn has_name(&self) -> bool {
        !self.speaker_name.trim().is_empty()
    }
}
