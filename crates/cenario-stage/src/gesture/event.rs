use cenario_engine::coords::Vec2;

/// Lifecycle phase of a pointer/touch event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Down,
    Move,
    Up,
    /// Host-initiated cancellation (focus loss, contact loss). Routed to the
    /// same cleanup as `Up`.
    Cancel,
}

/// One raw input event with up to two contact points in stage coordinates.
///
/// The engine is agnostic to mouse vs stylus vs touch; only the contact
/// count matters (one = drag, two = pinch).
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub phase: Phase,
    pub touches: Vec<Vec2>,
}

impl GestureEvent {
    pub fn down(p: Vec2) -> Self {
        Self { phase: Phase::Down, touches: vec![p] }
    }

    pub fn down2(a: Vec2, b: Vec2) -> Self {
        Self { phase: Phase::Down, touches: vec![a, b] }
    }

    pub fn moved(p: Vec2) -> Self {
        Self { phase: Phase::Move, touches: vec![p] }
    }

    pub fn moved2(a: Vec2, b: Vec2) -> Self {
        Self { phase: Phase::Move, touches: vec![a, b] }
    }

    pub fn up() -> Self {
        Self { phase: Phase::Up, touches: Vec::new() }
    }

    pub fn cancel() -> Self {
        Self { phase: Phase::Cancel, touches: Vec::new() }
    }

    /// First contact, if any.
    #[inline]
    pub fn primary(&self) -> Option<Vec2> {
        self.touches.first().copied()
    }

    /// Both contacts when exactly two are present.
    #[inline]
    pub fn pair(&self) -> Option<(Vec2, Vec2)> {
        match self.touches.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}
