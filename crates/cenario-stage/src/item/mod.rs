//! Scene items: the transformable props composed over the background.

mod store;

use std::sync::Arc;

use cenario_engine::coords::{Rect, Vec2};

use crate::bubble::{BubbleRaster, BubbleStyle};

pub use store::ItemStore;

/// Stable item identity for the item's whole lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemId(pub(crate) u64);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ItemKind {
    Character,
    Bubble,
    Sticker,
}

/// On-stage placement of one item: translation, uniform scale, rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    /// Uniform scale, always > 0.
    pub scale: f32,
    /// Degrees, unbounded. Pinch rotation accumulates without wrapping.
    pub rotation_deg: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0, rotation_deg: 0.0 }
    }
}

/// Handle to an encoded raster image plus its base (untransformed) size.
///
/// The pixel data is opaque here; `transform` + `image` are together
/// sufficient for a collaborator to reproduce the item's appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub width: u32,
    pub height: u32,
    pub bytes: Arc<[u8]>,
}

impl From<&BubbleRaster> for ImageRef {
    fn from(raster: &BubbleRaster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            bytes: Arc::from(raster.png.as_slice()),
        }
    }
}

/// One prop on the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub transform: Transform,
    /// Paint order; higher paints later (on top). The selected item paints
    /// above everything regardless, but that is display-only state owned by
    /// the stage, never written back here.
    pub stack_order: i32,
    pub visible: bool,
    /// Locked items ignore gesture input and refuse removal; they can still
    /// be selected and unlocked.
    pub locked: bool,
    pub image: ImageRef,
    /// Horizontal mirror, characters only.
    pub mirrored: bool,
    /// Retained for bubbles so they can be re-edited; re-rendering replaces
    /// `image` but keeps id, transform, and stack order.
    pub bubble_style: Option<BubbleStyle>,
}

impl SceneItem {
    /// On-stage bounds center, honoring scale.
    pub fn center(&self) -> Vec2 {
        let t = self.transform;
        Vec2::new(
            t.x + self.image.width as f32 * t.scale * 0.5,
            t.y + self.image.height as f32 * t.scale * 0.5,
        )
    }

    /// Hit test in stage coordinates: the pointer is mapped through the
    /// inverse rotation about the item's center, then tested against the
    /// scaled base rect.
    pub fn contains(&self, point: Vec2) -> bool {
        let t = self.transform;
        let local = point.rotated_about(self.center(), -t.rotation_deg);
        Rect::new(
            t.x,
            t.y,
            self.image.width as f32 * t.scale,
            self.image.height as f32 * t.scale,
        )
        .contains(local)
    }
}
