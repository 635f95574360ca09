//! Stage controller: owns selection, the active gesture session, and the
//! background transform, and routes pointer events to the right target.
//!
//! These three pieces of interaction state have exactly one owner so every
//! exit path (up, cancel, contact loss) reliably returns the machine to
//! idle, since a stuck session would swallow all future input.

use crate::background::{AspectRatio, BackgroundTransform};
use crate::bubble::{BubbleRaster, BubbleStyle};
use crate::gesture::{GestureEvent, GestureSession, GestureTarget, Phase};
use crate::item::{ImageRef, ItemId, ItemKind, ItemStore, SceneItem};

#[derive(Debug, Default)]
pub struct Stage {
    items: ItemStore,

    background: BackgroundTransform,
    background_image: Option<ImageRef>,
    background_locked: bool,
    aspect: AspectRatio,

    selected: Option<ItemId>,
    session: Option<GestureSession>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    // ── item surface ──────────────────────────────────────────────────────

    #[inline]
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    #[inline]
    pub fn items_mut(&mut self) -> &mut ItemStore {
        &mut self.items
    }

    pub fn add_item(&mut self, kind: ItemKind, image: ImageRef) -> ItemId {
        self.items.add(kind, image)
    }

    /// Adds a freshly rendered bubble and selects it.
    pub fn add_bubble(&mut self, style: BubbleStyle, raster: &BubbleRaster) -> ItemId {
        let id = self.items.add_bubble(style, raster);
        self.selected = Some(id);
        id
    }

    /// Replaces a bubble's style and raster after a re-edit.
    pub fn edit_bubble(&mut self, id: ItemId, style: BubbleStyle, raster: &BubbleRaster) {
        self.items.update_bubble(id, style, raster);
    }

    /// Removes an item (locked items refuse); clears selection and any
    /// session targeting it.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let removed = self.items.remove(id);
        if removed {
            if self.selected == Some(id) {
                self.selected = None;
            }
            if self.session.as_ref().map(|s| s.target) == Some(GestureTarget::Item(id)) {
                self.session = None;
            }
        }
        removed
    }

    #[inline]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }

    /// Items in paint order, selected item on top.
    pub fn paint_order(&self) -> Vec<&SceneItem> {
        self.items.paint_order(self.selected)
    }

    // ── background surface ────────────────────────────────────────────────

    #[inline]
    pub fn background(&self) -> &BackgroundTransform {
        &self.background
    }

    #[inline]
    pub fn background_image(&self) -> Option<&ImageRef> {
        self.background_image.as_ref()
    }

    #[inline]
    pub fn background_locked(&self) -> bool {
        self.background_locked
    }

    pub fn toggle_background_lock(&mut self) {
        self.background_locked = !self.background_locked;
    }

    /// Swaps (or clears) the background image; its transform resets.
    pub fn set_background(&mut self, image: Option<ImageRef>) {
        self.background_image = image;
        self.background.reset();
    }

    #[inline]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    /// Changes the output framing; the background transform resets.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.aspect = aspect;
        self.background.reset();
    }

    // ── gesture routing ───────────────────────────────────────────────────

    /// Single entry point for pointer/touch events from the stage surface.
    ///
    /// Malformed sequences are tolerated: moves with no session and downs
    /// during an active session are no-ops; up and cancel share one cleanup
    /// path.
    pub fn handle_event(&mut self, ev: &GestureEvent) {
        match ev.phase {
            Phase::Down => self.on_down(ev),
            Phase::Move => self.on_move(ev),
            Phase::Up | Phase::Cancel => self.on_release(),
        }
    }

    fn on_down(&mut self, ev: &GestureEvent) {
        // The active session owns the interaction until release.
        if self.session.is_some() {
            return;
        }
        let Some(point) = ev.primary() else {
            return;
        };

        match self.items.hit_test(point, self.selected) {
            Some(id) => {
                // Selection always follows the hit, independent of lock state.
                self.selected = Some(id);

                let item = match self.items.get(id) {
                    Some(item) => item,
                    None => return,
                };
                if item.locked || !item.visible {
                    return;
                }
                self.session =
                    GestureSession::begin(GestureTarget::Item(id), &ev.touches, &item.transform);
            }
            None => {
                self.selected = None;
                if self.background_locked {
                    return;
                }
                self.session = GestureSession::begin(
                    GestureTarget::Background,
                    &ev.touches,
                    &self.background,
                );
            }
        }
    }

    fn on_move(&mut self, ev: &GestureEvent) {
        let Some(session) = self.session.clone() else {
            return;
        };

        match session.target {
            GestureTarget::Item(id) => {
                if let Some(item) = self.items.get_mut(id) {
                    session.apply_move(&ev.touches, &mut item.transform);
                }
            }
            GestureTarget::Background => {
                if !self.background_locked {
                    session.apply_move(&ev.touches, &mut self.background);
                }
            }
        }
    }

    fn on_release(&mut self) {
        if self.session.take().is_some() {
            log::debug!("gesture ended, back to idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cenario_engine::coords::Vec2;
    use std::sync::Arc;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn image() -> ImageRef {
        ImageRef { width: 100, height: 100, bytes: Arc::from(&[][..]) }
    }

    fn stage_with_item() -> (Stage, ItemId) {
        let mut stage = Stage::new();
        let id = stage.add_item(ItemKind::Character, image());
        (stage, id)
    }

    #[test]
    fn down_on_item_selects_and_drag_moves_it() {
        let (mut stage, id) = stage_with_item();

        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        assert_eq!(stage.selected(), Some(id));

        stage.handle_event(&GestureEvent::moved(v(80.0, 65.0)));
        let t = stage.items().get(id).unwrap().transform;
        assert_eq!((t.x, t.y), (30.0, 15.0));

        stage.handle_event(&GestureEvent::up());
        // Session gone: further moves are no-ops.
        stage.handle_event(&GestureEvent::moved(v(300.0, 300.0)));
        let t = stage.items().get(id).unwrap().transform;
        assert_eq!((t.x, t.y), (30.0, 15.0));
    }

    #[test]
    fn down_on_empty_space_clears_selection_and_pans_background() {
        let (mut stage, id) = stage_with_item();
        stage.select(Some(id));

        stage.handle_event(&GestureEvent::down(v(500.0, 500.0)));
        assert_eq!(stage.selected(), None);

        stage.handle_event(&GestureEvent::moved(v(510.0, 490.0)));
        assert_eq!((stage.background().x, stage.background().y), (10.0, -10.0));
    }

    #[test]
    fn locked_item_selects_but_never_moves() {
        let (mut stage, id) = stage_with_item();
        stage.items_mut().set_locked(id, true);

        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        assert_eq!(stage.selected(), Some(id));

        stage.handle_event(&GestureEvent::moved(v(90.0, 90.0)));
        let t = stage.items().get(id).unwrap().transform;
        assert_eq!((t.x, t.y), (0.0, 0.0));
    }

    #[test]
    fn locked_background_ignores_gestures() {
        let mut stage = Stage::new();
        stage.toggle_background_lock();

        stage.handle_event(&GestureEvent::down(v(10.0, 10.0)));
        stage.handle_event(&GestureEvent::moved(v(50.0, 50.0)));
        assert_eq!(stage.background().x, 0.0);
    }

    #[test]
    fn two_finger_down_on_item_pinches_scale_and_rotation() {
        let (mut stage, id) = stage_with_item();

        stage.handle_event(&GestureEvent::down2(v(10.0, 10.0), v(110.0, 10.0)));
        stage.handle_event(&GestureEvent::moved2(v(10.0, 10.0), v(160.0, 10.0)));

        let t = stage.items().get(id).unwrap().transform;
        assert!((t.scale - 1.5).abs() < 1e-5);
    }

    #[test]
    fn second_down_during_session_is_ignored() {
        let (mut stage, id) = stage_with_item();

        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        // A stray second down must not restart the baseline.
        stage.handle_event(&GestureEvent::down(v(90.0, 90.0)));
        stage.handle_event(&GestureEvent::moved(v(60.0, 50.0)));

        let t = stage.items().get(id).unwrap().transform;
        assert_eq!((t.x, t.y), (10.0, 0.0));
    }

    #[test]
    fn cancel_routes_to_same_cleanup_as_up() {
        let (mut stage, id) = stage_with_item();

        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        stage.handle_event(&GestureEvent::cancel());
        stage.handle_event(&GestureEvent::moved(v(500.0, 500.0)));

        let t = stage.items().get(id).unwrap().transform;
        assert_eq!((t.x, t.y), (0.0, 0.0));
    }

    #[test]
    fn removing_session_target_drops_the_session() {
        let (mut stage, id) = stage_with_item();
        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        assert!(stage.remove_item(id));
        // Must not panic or resurrect the item.
        stage.handle_event(&GestureEvent::moved(v(60.0, 60.0)));
        assert_eq!(stage.selected(), None);
    }

    #[test]
    fn background_change_resets_transform() {
        let mut stage = Stage::new();
        stage.handle_event(&GestureEvent::down(v(10.0, 10.0)));
        stage.handle_event(&GestureEvent::moved(v(60.0, 60.0)));
        stage.handle_event(&GestureEvent::up());
        assert_eq!(stage.background().x, 50.0);

        stage.set_background(Some(image()));
        assert_eq!(stage.background().x, 0.0);
        assert_eq!(stage.background().scale, 1.0);
    }

    #[test]
    fn aspect_ratio_change_resets_transform() {
        let mut stage = Stage::new();
        stage.handle_event(&GestureEvent::down(v(0.0, 0.0)));
        stage.handle_event(&GestureEvent::moved(v(25.0, 0.0)));
        stage.handle_event(&GestureEvent::up());
        assert_eq!(stage.background().x, 25.0);

        stage.set_aspect_ratio(AspectRatio::Landscape);
        assert_eq!(stage.background().x, 0.0);
    }

    #[test]
    fn hidden_item_is_not_hit_but_stays_selected_if_chosen_via_api() {
        let (mut stage, id) = stage_with_item();
        stage.items_mut().set_visible(id, false);

        stage.handle_event(&GestureEvent::down(v(50.0, 50.0)));
        // The pointer fell through to empty space.
        assert_eq!(stage.selected(), None);
    }
}
