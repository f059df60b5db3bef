use std::collections::HashSet;

use crate::entity::EntityId;

/// Infrastructure entities that render but are never offered for selection
/// (viewport, selection highlight, editor overlays).
#[derive(Debug, Clone, Default)]
pub struct UnselectableSet {
    ids: HashSet<EntityId>,
}

impl UnselectableSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` was not yet in the set.
    #[inline]
    pub fn insert(&mut self, id: EntityId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if `id` was in the set.
    #[inline]
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.ids.remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<EntityId> for UnselectableSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
