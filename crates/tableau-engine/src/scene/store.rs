use std::collections::HashSet;

use anyhow::Result;

use crate::entity::EntityId;

use super::set::{dedup, OrderedEntitySet};

/// The live entity set of a scene plus its privileged viewport entity.
///
/// The viewport (camera frame) is live from construction and survives every
/// [`clear_all_except`](Self::clear_all_except), whether or not the caller
/// names it. All operations are total: absent, duplicated or never-seen
/// handles are no-ops rather than errors.
///
/// Mutating methods return `&mut Self` so calls can be chained:
///
/// ```rust
/// # use tableau_engine::prelude::*;
/// let mut scene = SceneStore::new();
/// let (a, b) = (EntityId::new(), EntityId::new());
/// scene.clear_all_except(&[a]).add(&[b]);
/// assert_eq!(scene.live_entities(), &[scene.viewport(), a, b]);
/// ```
#[derive(Debug, Clone)]
pub struct SceneStore {
    entities: OrderedEntitySet,
    viewport: EntityId,
}

impl SceneStore {
    /// Creates a store with a freshly allocated viewport entity.
    pub fn new() -> Self {
        Self::from_valid_viewport(EntityId::new())
    }

    /// Creates a store around a viewport entity owned by the caller.
    ///
    /// Fails if `viewport` is [`EntityId::INVALID`].
    pub fn with_viewport(viewport: EntityId) -> Result<Self> {
        anyhow::ensure!(viewport.is_valid(), "scene viewport entity is invalid");
        Ok(Self::from_valid_viewport(viewport))
    }

    fn from_valid_viewport(viewport: EntityId) -> Self {
        let mut entities = OrderedEntitySet::new();
        entities.add(&[viewport]);
        log::debug!("scene created with viewport {viewport}");
        Self { entities, viewport }
    }

    #[inline]
    pub fn viewport(&self) -> EntityId {
        self.viewport
    }

    /// Live entities in render order (back-to-front).
    #[inline]
    pub fn live_entities(&self) -> &[EntityId] {
        self.entities.as_slice()
    }

    #[inline]
    pub fn contains(&self, handle: EntityId) -> bool {
        self.entities.contains(handle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Appends handles that are not yet live, in argument order.
    pub fn add(&mut self, handles: &[EntityId]) -> &mut Self {
        let added = self.entities.add(handles);
        log::trace!("scene add: {added} new of {} given", handles.len());
        self
    }

    /// Removes live handles; absent ones are ignored.
    ///
    /// The viewport can be removed like any other entity; the next
    /// `clear_all_except` brings it back.
    pub fn remove(&mut self, handles: &[EntityId]) -> &mut Self {
        let removed = self.entities.remove(handles);
        log::trace!("scene remove: {removed} of {} given", handles.len());
        self
    }

    /// Removes every live entity, the viewport included.
    pub fn clear(&mut self) -> &mut Self {
        log::trace!("scene clear: {} dropped", self.entities.len());
        self.entities.clear();
        self
    }

    /// Keeps only `keep` plus the viewport; drops everything else.
    ///
    /// Kept entities that were already live stay in their former relative
    /// order. Kept entities that were not live are appended afterwards, in
    /// argument order, with the viewport ahead of them if it had been removed.
    /// Naming an entity that was never added inserts it.
    ///
    /// `clear_all_except(&[])` leaves only the viewport.
    pub fn clear_all_except(&mut self, keep: &[EntityId]) -> &mut Self {
        self.retain_only(keep, |_| false);
        self
    }

    /// Core of `clear_all_except`: `clear()` followed by `add()` of the
    /// effective keep list, where `preserve` marks extra live entities that
    /// must survive regardless of `keep`. Returns how many entities dropped.
    pub(crate) fn retain_only(
        &mut self,
        keep: &[EntityId],
        preserve: impl Fn(EntityId) -> bool,
    ) -> usize {
        let mut effective = Vec::with_capacity(keep.len() + 1);
        effective.push(self.viewport);
        effective.extend_from_slice(keep);
        let effective = dedup(&effective);
        let wanted: HashSet<EntityId> = effective.iter().copied().collect();

        let survivors: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|&id| wanted.contains(&id) || preserve(id))
            .collect();
        let dropped = self.entities.len() - survivors.len();

        self.entities.clear();
        self.entities.add(&survivors);
        let inserted = self.entities.add(&effective);

        log::debug!(
            "scene clear_all_except: kept {}, dropped {dropped}, inserted {inserted}",
            survivors.len()
        );
        dropped
    }

    /// Moves handles to the top of the render order (inserting absent ones).
    pub fn bring_to_front(&mut self, handles: &[EntityId]) -> &mut Self {
        self.entities.move_to_end(handles);
        self
    }

    /// Moves handles to the bottom of the render order (inserting absent ones).
    pub fn bring_to_back(&mut self, handles: &[EntityId]) -> &mut Self {
        self.entities.move_to_start(handles);
        self
    }

    /// Puts `new` into the render slot held by `old`.
    ///
    /// No-op if `old` is not live. If `new` is already live it is moved out of
    /// its own slot first.
    pub fn replace(&mut self, old: EntityId, new: EntityId) -> &mut Self {
        if old == new || !self.entities.contains(old) {
            return self;
        }
        if self.entities.contains(new) {
            self.entities.remove(&[new]);
        }
        if let Some(slot) = self.entities.position(old) {
            self.entities.overwrite_slot(slot, new);
            log::trace!("scene replace: {old} -> {new} at {slot}");
        }
        self
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
