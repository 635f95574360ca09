use cenario_engine::coords::Vec2;

use crate::item::ItemId;

use super::target::Transformable;

/// What the active session manipulates.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GestureTarget {
    Item(ItemId),
    Background,
}

/// Session mode. `Idle` never appears inside a stored session (the stage
/// models idle as "no session") but it names the machine's resting state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GestureMode {
    Idle,
    ItemDrag,
    ItemPinch,
    BackgroundDrag,
    BackgroundPinch,
}

/// Baseline captured on pointer-down and held for one continuous
/// interaction; discarded on release or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub mode: GestureMode,
    pub target: GestureTarget,

    start_pointer: Vec2,
    start_distance: f32,
    start_angle_deg: f32,

    start_position: Vec2,
    start_scale: f32,
    start_rotation_deg: f32,
}

impl GestureSession {
    /// Captures a baseline for `target`. Two contacts begin a pinch, one a
    /// drag; the target's current transform becomes the reference every
    /// subsequent move is computed from.
    pub fn begin(target: GestureTarget, touches: &[Vec2], t: &dyn Transformable) -> Option<Self> {
        let is_item = matches!(target, GestureTarget::Item(_));

        let (mode, start_pointer, start_distance, start_angle_deg) = match touches {
            [a, b] => {
                let mode = if is_item { GestureMode::ItemPinch } else { GestureMode::BackgroundPinch };
                (mode, *a, a.distance(*b), a.angle_to_deg(*b))
            }
            [p] => {
                let mode = if is_item { GestureMode::ItemDrag } else { GestureMode::BackgroundDrag };
                (mode, *p, 0.0, 0.0)
            }
            _ => return None,
        };

        log::debug!("gesture begin: {mode:?} on {target:?}");
        Some(Self {
            mode,
            target,
            start_pointer,
            start_distance,
            start_angle_deg,
            start_position: t.position(),
            start_scale: t.scale(),
            start_rotation_deg: t.rotation_deg().unwrap_or(0.0),
        })
    }

    /// Applies a move event to the target.
    ///
    /// A drag with no contacts, or a pinch that lost its second contact,
    /// simply stops updating: no error, no snapping.
    pub fn apply_move(&self, touches: &[Vec2], t: &mut dyn Transformable) {
        match self.mode {
            GestureMode::ItemDrag | GestureMode::BackgroundDrag => {
                let Some(&pointer) = touches.first() else {
                    return;
                };
                t.set_position(self.start_position + (pointer - self.start_pointer));
            }

            GestureMode::ItemPinch | GestureMode::BackgroundPinch => {
                let [a, b] = touches else {
                    return;
                };
                if self.start_distance <= 0.0 {
                    return;
                }

                let ratio = a.distance(*b) / self.start_distance;
                t.set_scale((self.start_scale * ratio).max(t.scale_floor()));

                if self.mode == GestureMode::ItemPinch {
                    let delta = a.angle_to_deg(*b) - self.start_angle_deg;
                    t.set_rotation_deg(self.start_rotation_deg + delta);
                }
            }

            GestureMode::Idle => {}
        }
    }
}
