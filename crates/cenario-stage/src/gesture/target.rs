use cenario_engine::coords::Vec2;

use crate::background::BackgroundTransform;
use crate::item::Transform;

/// Items may shrink to a tenth of their size.
pub const ITEM_SCALE_FLOOR: f32 = 0.1;
/// The background stops at a fifth, higher than the item floor.
pub const BACKGROUND_SCALE_FLOOR: f32 = 0.2;

/// A gesture target: anything with a pannable position, a floored uniform
/// scale, and (optionally) pinch rotation.
///
/// One trait serves both the per-item transform and the background layer,
/// so the state machine has a single drag/pinch implementation.
pub trait Transformable {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, p: Vec2);

    fn scale(&self) -> f32;
    /// Implementations clamp to their own floor.
    fn set_scale(&mut self, scale: f32);
    fn scale_floor(&self) -> f32;

    /// `None` when the target does not rotate (the background).
    fn rotation_deg(&self) -> Option<f32>;
    /// No-op for targets without rotation.
    fn set_rotation_deg(&mut self, deg: f32);
}

impl Transformable for Transform {
    fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Vec2) {
        self.x = p.x;
        self.y = p.y;
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(ITEM_SCALE_FLOOR);
    }

    fn scale_floor(&self) -> f32 {
        ITEM_SCALE_FLOOR
    }

    fn rotation_deg(&self) -> Option<f32> {
        Some(self.rotation_deg)
    }

    fn set_rotation_deg(&mut self, deg: f32) {
        self.rotation_deg = deg;
    }
}

impl Transformable for BackgroundTransform {
    fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Vec2) {
        self.x = p.x;
        self.y = p.y;
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(BACKGROUND_SCALE_FLOOR);
    }

    fn scale_floor(&self) -> f32 {
        BACKGROUND_SCALE_FLOOR
    }

    fn rotation_deg(&self) -> Option<f32> {
        None
    }

    fn set_rotation_deg(&mut self, _deg: f32) {}
}
