use cenario_engine::coords::Vec2;

use crate::bubble::{BubbleRaster, BubbleStyle};

use super::{ImageRef, ItemId, ItemKind, SceneItem, Transform};

/// Ordered collection of scene items and the mutation surface the chrome
/// and the gesture engine call into.
///
/// Paint order is `stack_order` ascending with insertion order breaking
/// ties; the currently selected item always paints last, purely as an
/// interaction affordance (its `stack_order` is untouched).
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<SceneItem>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item of `kind`, placing it on top of the current stack.
    pub fn add(&mut self, kind: ItemKind, image: ImageRef) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;

        let top = self.items.iter().map(|i| i.stack_order).max().unwrap_or(0);
        self.items.push(SceneItem {
            id,
            kind,
            transform: Transform::default(),
            stack_order: top + 1,
            visible: true,
            locked: false,
            image,
            mirrored: false,
            bubble_style: None,
        });

        log::debug!("added {kind:?} item {id:?}");
        id
    }

    /// Adds a bubble item, retaining its style for later re-editing.
    pub fn add_bubble(&mut self, style: BubbleStyle, raster: &BubbleRaster) -> ItemId {
        let id = self.add(ItemKind::Bubble, ImageRef::from(raster));
        if let Some(item) = self.get_mut(id) {
            item.bubble_style = Some(style);
        }
        id
    }

    /// Removes an item. Locked items refuse removal; returns whether the
    /// item was actually removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|i| i.id == id) {
            Some(idx) if !self.items[idx].locked => {
                self.items.remove(idx);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.iter().find(|i| i.id == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut SceneItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_visible(&mut self, id: ItemId, visible: bool) {
        if let Some(item) = self.get_mut(id) {
            item.visible = visible;
        }
    }

    pub fn set_locked(&mut self, id: ItemId, locked: bool) {
        if let Some(item) = self.get_mut(id) {
            item.locked = locked;
        }
    }

    /// Horizontal mirror; only characters support it, other kinds ignore it.
    pub fn set_mirrored(&mut self, id: ItemId, mirrored: bool) {
        if let Some(item) = self.get_mut(id) {
            if item.kind == ItemKind::Character {
                item.mirrored = mirrored;
            }
        }
    }

    /// Reassigns an item's paint order.
    pub fn restack(&mut self, id: ItemId, stack_order: i32) {
        if let Some(item) = self.get_mut(id) {
            item.stack_order = stack_order;
        }
    }

    /// Replaces a bubble's style and raster after a re-edit, keeping id,
    /// transform, and stack order. Non-bubble items ignore this.
    pub fn update_bubble(&mut self, id: ItemId, style: BubbleStyle, raster: &BubbleRaster) {
        if let Some(item) = self.get_mut(id) {
            if item.kind == ItemKind::Bubble {
                item.image = ImageRef::from(raster);
                item.bubble_style = Some(style);
                log::debug!("re-rendered bubble {id:?}");
            }
        }
    }

    /// Items in paint order: `stack_order` ascending, the selected item
    /// (if any) moved to the end.
    pub fn paint_order(&self, selected: Option<ItemId>) -> Vec<&SceneItem> {
        let mut ordered: Vec<&SceneItem> = self.items.iter().collect();
        ordered.sort_by_key(|i| i.stack_order);
        if let Some(sel) = selected {
            if let Some(pos) = ordered.iter().position(|i| i.id == sel) {
                let item = ordered.remove(pos);
                ordered.push(item);
            }
        }
        ordered
    }

    /// Topmost visible item under `point`, honoring the selected-on-top
    /// display rule. Hidden items are never hit; locked items still are
    /// (selection must work on them).
    pub fn hit_test(&self, point: Vec2, selected: Option<ItemId>) -> Option<ItemId> {
        self.paint_order(selected)
            .iter()
            .rev()
            .find(|i| i.visible && i.contains(point))
            .map(|i| i.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn image() -> ImageRef {
        ImageRef { width: 100, height: 100, bytes: Arc::from(&[][..]) }
    }

    fn store_with(n: usize) -> (ItemStore, Vec<ItemId>) {
        let mut store = ItemStore::new();
        let ids = (0..n).map(|_| store.add(ItemKind::Sticker, image())).collect();
        (store, ids)
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let (store, ids) = store_with(3);
        assert_eq!(ids.len(), 3);
        assert!(ids[0] != ids[1] && ids[1] != ids[2]);
        for id in &ids {
            assert_eq!(store.get(*id).unwrap().id, *id);
        }
    }

    #[test]
    fn new_items_stack_on_top() {
        let (store, ids) = store_with(2);
        let order = store.paint_order(None);
        assert_eq!(order.last().unwrap().id, ids[1]);
    }

    #[test]
    fn selected_item_paints_topmost_without_restacking() {
        let (store, ids) = store_with(3);
        let order = store.paint_order(Some(ids[0]));
        assert_eq!(order.last().unwrap().id, ids[0]);
        // The persisted stack order is untouched.
        assert!(store.get(ids[0]).unwrap().stack_order < store.get(ids[2]).unwrap().stack_order);
    }

    #[test]
    fn locked_items_refuse_removal() {
        let (mut store, ids) = store_with(1);
        store.set_locked(ids[0], true);
        assert!(!store.remove(ids[0]));
        store.set_locked(ids[0], false);
        assert!(store.remove(ids[0]));
        assert!(store.is_empty());
    }

    #[test]
    fn mirror_only_applies_to_characters() {
        let mut store = ItemStore::new();
        let sticker = store.add(ItemKind::Sticker, image());
        let character = store.add(ItemKind::Character, image());

        store.set_mirrored(sticker, true);
        store.set_mirrored(character, true);

        assert!(!store.get(sticker).unwrap().mirrored);
        assert!(store.get(character).unwrap().mirrored);
    }

    #[test]
    fn hit_test_prefers_topmost_and_skips_hidden() {
        let (mut store, ids) = store_with(2);
        // Both items cover (50, 50); the later one is on top.
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(store.hit_test(p, None), Some(ids[1]));

        store.set_visible(ids[1], false);
        assert_eq!(store.hit_test(p, None), Some(ids[0]));

        store.set_visible(ids[0], false);
        assert_eq!(store.hit_test(p, None), None);
    }

    #[test]
    fn hit_test_honors_selected_on_top() {
        let (store, ids) = store_with(2);
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(store.hit_test(p, Some(ids[0])), Some(ids[0]));
    }

    #[test]
    fn locked_items_are_still_hit() {
        let (mut store, ids) = store_with(1);
        store.set_locked(ids[0], true);
        assert_eq!(store.hit_test(Vec2::new(10.0, 10.0), None), Some(ids[0]));
    }

    #[test]
    fn restack_changes_paint_order() {
        let (mut store, ids) = store_with(2);
        store.restack(ids[0], 100);
        assert_eq!(store.paint_order(None).last().unwrap().id, ids[0]);
    }
}
