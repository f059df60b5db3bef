use std::collections::HashSet;

use crate::coords::{Rect, Vec2};
use crate::entity::EntityId;

use super::{BoundsSource, UnselectableSet};

/// Selectable live entities, in render order, for hit testing.
///
/// Derived data: built only by [`SelectionIndex::build`] or the owning
/// [`InteractiveScene`](super::InteractiveScene), always from scratch.
#[derive(Debug, Clone, Default)]
pub struct SelectionIndex {
    entries: Vec<EntityId>,
    members: HashSet<EntityId>,
}

impl SelectionIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index over `live` minus `unselectables`.
    pub fn build(live: &[EntityId], unselectables: &UnselectableSet) -> Self {
        let mut index = Self::new();
        index.rebuild(live, unselectables);
        index
    }

    pub(crate) fn rebuild(&mut self, live: &[EntityId], unselectables: &UnselectableSet) {
        self.entries.clear();
        self.members.clear();
        for &id in live {
            if !unselectables.contains(id) && self.members.insert(id) {
                self.entries.push(id);
            }
        }
        log::trace!(
            "selection index rebuilt: {} selectable of {} live",
            self.entries.len(),
            live.len()
        );
    }

    /// Indexed entities in render order (back-to-front).
    #[inline]
    pub fn entities(&self) -> &[EntityId] {
        &self.entries
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Topmost indexed entity whose bounds contain `point`.
    pub fn pick<B>(&self, point: Vec2, bounds: &B) -> Option<EntityId>
    where
        B: BoundsSource + ?Sized,
    {
        self.entries
            .iter()
            .rev()
            .copied()
            .find(|&id| bounds.bounds(id).is_some_and(|r| r.contains(point)))
    }

    /// Indexed entities whose bounds touch `area`, in render order.
    pub fn pick_in_rect<B>(&self, area: Rect, bounds: &B) -> Vec<EntityId>
    where
        B: BoundsSource + ?Sized,
    {
        self.entries
            .iter()
            .copied()
            .filter(|&id| bounds.bounds(id).is_some_and(|r| r.intersects(area)))
            .collect()
    }
}
