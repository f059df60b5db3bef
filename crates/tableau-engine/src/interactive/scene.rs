use anyhow::Result;

use crate::coords::{Rect, Vec2};
use crate::entity::EntityId;
use crate::scene::{OrderedEntitySet, Scene, SceneStore};

use super::{BoundsSource, SelectionIndex, UnselectableSet};

/// How a pick result combines with the current selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SelectionMode {
    /// Replace the current selection (plain click / drag).
    #[default]
    Replace,
    /// Add to the current selection.
    Add,
    /// Remove from the current selection.
    Remove,
}

/// A scene store for interactive authoring.
///
/// Adds, on top of [`SceneStore`]:
/// - a selection-highlight entity that is live from construction,
/// - an [`UnselectableSet`] seeded with the viewport and the highlight,
/// - a [`SelectionIndex`] rebuilt after every membership mutation,
/// - the user's current selection, always a subset of the index.
///
/// `clear_all_except` here also preserves every unselectable entity that was
/// live before the call, so editor infrastructure never disappears when the
/// author clears content.
#[derive(Debug, Clone)]
pub struct InteractiveScene {
    store: SceneStore,
    highlight: EntityId,
    unselectables: UnselectableSet,
    index: SelectionIndex,
    selected: OrderedEntitySet,
}

impl InteractiveScene {
    /// Creates a scene with freshly allocated viewport and highlight entities.
    pub fn new() -> Self {
        Self::assemble(SceneStore::new(), EntityId::new())
    }

    /// Creates a scene around infrastructure entities owned by the caller.
    ///
    /// Fails if either id is invalid or both are the same entity.
    pub fn with_infrastructure(viewport: EntityId, highlight: EntityId) -> Result<Self> {
        anyhow::ensure!(highlight.is_valid(), "selection highlight entity is invalid");
        anyhow::ensure!(
            viewport != highlight,
            "viewport and selection highlight must be distinct entities ({viewport})"
        );
        Ok(Self::assemble(SceneStore::with_viewport(viewport)?, highlight))
    }

    fn assemble(mut store: SceneStore, highlight: EntityId) -> Self {
        store.add(&[highlight]);
        let unselectables: UnselectableSet = [store.viewport(), highlight].into_iter().collect();
        let mut scene = Self {
            store,
            highlight,
            unselectables,
            index: SelectionIndex::new(),
            selected: OrderedEntitySet::new(),
        };
        scene.regenerate_selection_index();
        scene
    }

    #[inline]
    pub fn viewport(&self) -> EntityId {
        self.store.viewport()
    }

    /// The overlay entity that draws the current selection.
    #[inline]
    pub fn highlight(&self) -> EntityId {
        self.highlight
    }

    #[inline]
    pub fn live_entities(&self) -> &[EntityId] {
        self.store.live_entities()
    }

    #[inline]
    pub fn contains(&self, handle: EntityId) -> bool {
        self.store.contains(handle)
    }

    #[inline]
    pub fn selection_index(&self) -> &SelectionIndex {
        &self.index
    }

    #[inline]
    pub fn unselectables(&self) -> &UnselectableSet {
        &self.unselectables
    }

    /// Currently selected entities, in selection order.
    #[inline]
    pub fn selected(&self) -> &[EntityId] {
        self.selected.as_slice()
    }

    // ── membership ────────────────────────────────────────────────────────

    pub fn add(&mut self, handles: &[EntityId]) -> &mut Self {
        self.store.add(handles);
        self.regenerate_selection_index();
        self
    }

    pub fn remove(&mut self, handles: &[EntityId]) -> &mut Self {
        self.store.remove(handles);
        self.regenerate_selection_index();
        self
    }

    /// Removes every live entity, infrastructure included.
    pub fn clear(&mut self) -> &mut Self {
        self.store.clear();
        self.regenerate_selection_index();
        self
    }

    /// Keeps only `keep`, the viewport, and whichever unselectable entities
    /// were already live. See [`SceneStore::clear_all_except`] for ordering.
    pub fn clear_all_except(&mut self, keep: &[EntityId]) -> &mut Self {
        let unselectables = &self.unselectables;
        self.store.retain_only(keep, |id| unselectables.contains(id));
        self.regenerate_selection_index();
        self
    }

    pub fn bring_to_front(&mut self, handles: &[EntityId]) -> &mut Self {
        self.store.bring_to_front(handles);
        self.regenerate_selection_index();
        self
    }

    pub fn bring_to_back(&mut self, handles: &[EntityId]) -> &mut Self {
        self.store.bring_to_back(handles);
        self.regenerate_selection_index();
        self
    }

    pub fn replace(&mut self, old: EntityId, new: EntityId) -> &mut Self {
        self.store.replace(old, new);
        self.regenerate_selection_index();
        self
    }

    // ── unselectables ─────────────────────────────────────────────────────

    /// Marks `id` as infrastructure. Returns `true` if it was newly marked.
    pub fn mark_unselectable(&mut self, id: EntityId) -> bool {
        let inserted = self.unselectables.insert(id);
        if inserted {
            self.regenerate_selection_index();
        }
        inserted
    }

    /// Makes a previously marked entity selectable again.
    ///
    /// The viewport and highlight always stay unselectable; returns `false`
    /// for them and for entities that were not marked.
    pub fn mark_selectable(&mut self, id: EntityId) -> bool {
        if id == self.viewport() || id == self.highlight {
            return false;
        }
        let removed = self.unselectables.remove(id);
        if removed {
            self.regenerate_selection_index();
        }
        removed
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Adds indexed entities to the selection; others are ignored.
    pub fn select(&mut self, ids: &[EntityId]) -> &mut Self {
        self.apply_selection(ids, SelectionMode::Add);
        self
    }

    pub fn deselect(&mut self, ids: &[EntityId]) -> &mut Self {
        self.selected.remove(ids);
        self
    }

    pub fn clear_selection(&mut self) -> &mut Self {
        self.selected.clear();
        self
    }

    /// Picks the topmost selectable entity under `point` and applies `mode`.
    ///
    /// A miss in [`SelectionMode::Replace`] clears the selection.
    pub fn select_at<B>(&mut self, point: Vec2, bounds: &B, mode: SelectionMode) -> Option<EntityId>
    where
        B: BoundsSource + ?Sized,
    {
        let hit = self.index.pick(point, bounds);
        match hit {
            Some(id) => self.apply_selection(&[id], mode),
            None => self.apply_selection(&[], mode),
        }
        hit
    }

    /// Applies `mode` to every selectable entity touching `area`.
    ///
    /// Returns the number of entities hit.
    pub fn select_in_rect<B>(&mut self, area: Rect, bounds: &B, mode: SelectionMode) -> usize
    where
        B: BoundsSource + ?Sized,
    {
        let hits = self.index.pick_in_rect(area, bounds);
        self.apply_selection(&hits, mode);
        hits.len()
    }

    fn apply_selection(&mut self, ids: &[EntityId], mode: SelectionMode) {
        let selectable: Vec<EntityId> = ids
            .iter()
            .copied()
            .filter(|&id| self.index.contains(id))
            .collect();
        match mode {
            SelectionMode::Replace => {
                self.selected.clear();
                self.selected.add(&selectable);
            }
            SelectionMode::Add => {
                self.selected.add(&selectable);
            }
            SelectionMode::Remove => {
                self.selected.remove(&selectable);
            }
        }
        log::trace!("selection {mode:?}: {} selected", self.selected.len());
    }

    /// Rebuilds the index from the store and prunes the selection to it.
    fn regenerate_selection_index(&mut self) {
        self.index.rebuild(self.store.live_entities(), &self.unselectables);

        let stale: Vec<EntityId> = self
            .selected
            .iter()
            .filter(|&id| !self.index.contains(id))
            .collect();
        if !stale.is_empty() {
            self.selected.remove(&stale);
            log::debug!("selection pruned {} entities no longer selectable", stale.len());
        }
    }
}

impl Default for InteractiveScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for InteractiveScene {
    #[inline]
    fn viewport(&self) -> EntityId {
        InteractiveScene::viewport(self)
    }

    #[inline]
    fn live_entities(&self) -> &[EntityId] {
        InteractiveScene::live_entities(self)
    }

    #[inline]
    fn contains(&self, handle: EntityId) -> bool {
        InteractiveScene::contains(self, handle)
    }

    fn add(&mut self, handles: &[EntityId]) -> &mut Self {
        InteractiveScene::add(self, handles)
    }

    fn remove(&mut self, handles: &[EntityId]) -> &mut Self {
        InteractiveScene::remove(self, handles)
    }

    fn clear(&mut self) -> &mut Self {
        InteractiveScene::clear(self)
    }

    fn clear_all_except(&mut self, keep: &[EntityId]) -> &mut Self {
        InteractiveScene::clear_all_except(self, keep)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn ids<const N: usize>() -> [EntityId; N] {
        core::array::from_fn(|_| EntityId::new())
    }

    /// `selection_index == live \ unselectables`, in render order, and the
    /// selection is a subset of the index.
    fn assert_index_fresh(scene: &InteractiveScene) {
        let expected: Vec<EntityId> = scene
            .live_entities()
            .iter()
            .copied()
            .filter(|&id| !scene.unselectables().contains(id))
            .collect();
        assert_eq!(scene.selection_index().entities(), expected.as_slice());
        for &id in scene.selected() {
            assert!(scene.selection_index().contains(id), "stale selection {id}");
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn infrastructure_is_live_but_not_indexed() {
        let scene = InteractiveScene::new();
        assert_eq!(scene.live_entities(), &[scene.viewport(), scene.highlight()]);
        assert!(scene.selection_index().is_empty());
        assert_eq!(scene.unselectables().len(), 2);
    }

    #[test]
    fn with_infrastructure_validates_ids() {
        let frame = EntityId::new();
        assert!(InteractiveScene::with_infrastructure(frame, frame).is_err());
        assert!(InteractiveScene::with_infrastructure(EntityId::INVALID, frame).is_err());
        assert!(InteractiveScene::with_infrastructure(frame, EntityId::INVALID).is_err());
        let scene = InteractiveScene::with_infrastructure(frame, EntityId::new()).unwrap();
        assert_eq!(scene.viewport(), frame);
    }

    // ── index freshness ───────────────────────────────────────────────────

    #[test]
    fn index_is_fresh_after_every_mutation() {
        let [circle, square, triangle, dot] = ids::<4>();
        let mut scene = InteractiveScene::new();
        assert_index_fresh(&scene);

        scene.add(&[circle, square, triangle]);
        assert_index_fresh(&scene);
        assert_eq!(scene.selection_index().entities(), &[circle, square, triangle]);

        scene.remove(&[square]);
        assert_index_fresh(&scene);

        scene.bring_to_back(&[triangle]);
        assert_index_fresh(&scene);

        scene.replace(circle, dot);
        assert_index_fresh(&scene);

        scene.clear_all_except(&[dot]);
        assert_index_fresh(&scene);
        assert_eq!(scene.selection_index().entities(), &[dot]);

        scene.clear();
        assert_index_fresh(&scene);
        assert!(scene.selection_index().is_empty());
    }

    #[test]
    fn marking_unselectable_rebuilds_index() {
        let [a, guide] = ids::<2>();
        let mut scene = InteractiveScene::new();
        scene.add(&[a, guide]);
        assert!(scene.mark_unselectable(guide));
        assert!(!scene.mark_unselectable(guide));
        assert_index_fresh(&scene);
        assert_eq!(scene.selection_index().entities(), &[a]);

        assert!(scene.mark_selectable(guide));
        assert_eq!(scene.selection_index().entities(), &[a, guide]);
        assert!(!scene.mark_selectable(scene.highlight()));
        assert!(!scene.mark_selectable(scene.viewport()));
    }

    // ── clear_all_except ──────────────────────────────────────────────────

    #[test]
    fn clear_all_except_keeps_live_infrastructure() {
        let [circle, square, triangle] = ids::<3>();
        let mut scene = InteractiveScene::new();
        let (vp, hl) = (scene.viewport(), scene.highlight());
        scene.add(&[circle, square, triangle]);

        scene.clear_all_except(&[circle, triangle]);
        assert_eq!(scene.live_entities(), &[vp, hl, circle, triangle]);
        assert_eq!(scene.selection_index().entities(), &[circle, triangle]);

        scene.clear_all_except(&[]);
        assert_eq!(scene.live_entities(), &[vp, hl]);
        assert!(scene.selection_index().is_empty());
    }

    #[test]
    fn clear_all_except_does_not_resurrect_removed_infrastructure() {
        let [a] = ids::<1>();
        let mut scene = InteractiveScene::new();
        let hl = scene.highlight();
        scene.add(&[a]).remove(&[hl]);
        scene.clear_all_except(&[a]);
        assert!(!scene.contains(hl));
        assert!(scene.contains(scene.viewport()));
    }

    #[test]
    fn clear_all_except_restores_removed_viewport() {
        let [a, b] = ids::<2>();
        let mut scene = InteractiveScene::new();
        let (vp, hl) = (scene.viewport(), scene.highlight());
        scene.add(&[a, b]).remove(&[vp]);
        assert!(!scene.contains(vp));
        scene.clear_all_except(&[a]);
        assert_eq!(scene.live_entities(), &[hl, a, vp]);
        assert_eq!(scene.selection_index().entities(), &[a]);
        assert_index_fresh(&scene);
    }

    #[test]
    fn named_infrastructure_is_kept_but_never_indexed() {
        let [a] = ids::<1>();
        let mut scene = InteractiveScene::new();
        let hl = scene.highlight();
        scene.add(&[a]).clear_all_except(&[hl, a, a]);
        assert!(scene.contains(hl));
        assert!(!scene.selection_index().contains(hl));
        assert_index_fresh(&scene);
    }

    #[test]
    fn chaining_returns_same_scene() {
        let [dot, b] = ids::<2>();
        let mut scene = InteractiveScene::new();
        let addr = &scene as *const InteractiveScene;
        let chained = scene.clear_all_except(&[dot]).add(&[b]);
        assert!(core::ptr::eq(chained, addr));
        assert!(scene.contains(dot) && scene.contains(b));
        assert_index_fresh(&scene);
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn select_ignores_unselectable_and_dead_entities() {
        let [a, ghost] = ids::<2>();
        let mut scene = InteractiveScene::new();
        let hl = scene.highlight();
        scene.add(&[a]).select(&[a, hl, ghost]);
        assert_eq!(scene.selected(), &[a]);
    }

    #[test]
    fn deselect_and_clear_selection() {
        let [a, b, c] = ids::<3>();
        let mut scene = InteractiveScene::new();
        scene.add(&[a, b, c]).select(&[c, a, b]).deselect(&[a]);
        assert_eq!(scene.selected(), &[c, b]);
        scene.clear_selection();
        assert!(scene.selected().is_empty());
        assert_eq!(scene.selection_index().len(), 3);
    }

    #[test]
    fn selection_is_pruned_when_entities_leave() {
        let [a, b, c] = ids::<3>();
        let mut scene = InteractiveScene::new();
        scene.add(&[a, b, c]).select(&[a, b, c]);
        scene.clear_all_except(&[b]);
        assert_eq!(scene.selected(), &[b]);

        scene.add(&[a]).mark_unselectable(b);
        assert!(scene.selected().is_empty());
        assert_index_fresh(&scene);
    }

    #[test]
    fn select_at_applies_modes() {
        let [back, front] = ids::<2>();
        let mut scene = InteractiveScene::new();
        scene.add(&[back, front]);
        let mut bounds = HashMap::new();
        bounds.insert(back, Rect::new(0.0, 0.0, 10.0, 10.0));
        bounds.insert(front, Rect::new(20.0, 0.0, 10.0, 10.0));

        let hit = scene.select_at(Vec2::new(5.0, 5.0), &bounds, SelectionMode::Replace);
        assert_eq!(hit, Some(back));
        scene.select_at(Vec2::new(25.0, 5.0), &bounds, SelectionMode::Add);
        assert_eq!(scene.selected(), &[back, front]);
        scene.select_at(Vec2::new(5.0, 5.0), &bounds, SelectionMode::Remove);
        assert_eq!(scene.selected(), &[front]);

        let miss = scene.select_at(Vec2::new(500.0, 5.0), &bounds, SelectionMode::Replace);
        assert_eq!(miss, None);
        assert!(scene.selected().is_empty());
    }

    #[test]
    fn select_in_rect_skips_infrastructure() {
        let [a, b] = ids::<2>();
        let mut scene = InteractiveScene::new();
        scene.add(&[a, b]);
        // Infrastructure covers everything; it must never be picked.
        let everywhere = |_: EntityId| Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let area = Rect::new(10.0, 10.0, 5.0, 5.0);
        let hits = scene.select_in_rect(area, &everywhere, SelectionMode::Replace);
        assert_eq!(hits, 2);
        assert_eq!(scene.selected(), &[a, b]);
    }

    #[test]
    fn works_through_scene_trait() {
        fn keep_first<S: Scene>(scene: &mut S, ids: &[EntityId]) {
            scene.add(ids).clear_all_except(&ids[..1]);
        }
        let [a, b] = ids::<2>();
        let mut scene = InteractiveScene::new();
        keep_first(&mut scene, &[a, b]);
        assert_eq!(scene.content(), vec![scene.highlight(), a]);
        assert_index_fresh(&scene);
    }
}
