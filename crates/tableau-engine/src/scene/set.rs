use std::collections::HashSet;

use crate::entity::EntityId;

/// Deduplicated, insertion-ordered sequence of entity handles.
///
/// Order is render order: later entries draw on top of earlier ones.
///
/// Performance characteristics:
/// - `contains()` is O(1)
/// - `add()` is O(k) for k handles
/// - `remove()` and the reorder helpers are O(n + k)
#[derive(Debug, Clone, Default)]
pub struct OrderedEntitySet {
    order: Vec<EntityId>,
    members: HashSet<EntityId>,
}

impl OrderedEntitySet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends each handle not already present, in argument order.
    ///
    /// Handles already present keep their position. Returns how many handles
    /// were genuinely new.
    pub fn add(&mut self, handles: &[EntityId]) -> usize {
        let before = self.order.len();
        for &id in handles {
            if self.members.insert(id) {
                self.order.push(id);
            }
        }
        self.order.len() - before
    }

    /// Removes each handle that is present; absent handles are ignored.
    ///
    /// Returns how many handles were removed.
    pub fn remove(&mut self, handles: &[EntityId]) -> usize {
        let mut removed = 0;
        for id in handles {
            if self.members.remove(id) {
                removed += 1;
            }
        }
        if removed > 0 {
            let members = &self.members;
            self.order.retain(|id| members.contains(id));
        }
        removed
    }

    #[inline]
    pub fn contains(&self, handle: EntityId) -> bool {
        self.members.contains(&handle)
    }

    /// Removes every handle. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Snapshot of the current order.
    #[inline]
    pub fn to_sequence(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    #[inline]
    pub fn as_slice(&self) -> &[EntityId] {
        &self.order
    }

    /// Iterates back-to-front.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position in render order, if present.
    pub fn position(&self, handle: EntityId) -> Option<usize> {
        if !self.contains(handle) {
            return None;
        }
        self.order.iter().position(|&id| id == handle)
    }

    /// Moves the given handles to the top of the render order, in argument
    /// order. Absent handles are inserted.
    pub fn move_to_end(&mut self, handles: &[EntityId]) {
        let moving = dedup(handles);
        if moving.is_empty() {
            return;
        }
        let lookup: HashSet<EntityId> = moving.iter().copied().collect();
        self.order.retain(|id| !lookup.contains(id));
        self.order.extend_from_slice(&moving);
        self.members.extend(moving);
    }

    /// Moves the given handles to the bottom of the render order, in argument
    /// order. Absent handles are inserted.
    pub fn move_to_start(&mut self, handles: &[EntityId]) {
        let mut moving = dedup(handles);
        if moving.is_empty() {
            return;
        }
        let lookup: HashSet<EntityId> = moving.iter().copied().collect();
        self.members.extend(moving.iter().copied());
        moving.extend(self.order.iter().copied().filter(|id| !lookup.contains(id)));
        self.order = moving;
    }

    /// Overwrites the slot at `index` with `handle`.
    ///
    /// Caller guarantees `index` is in bounds and `handle` is not already a
    /// member; used by [`SceneStore::replace`](crate::scene::SceneStore::replace).
    pub(crate) fn overwrite_slot(&mut self, index: usize, handle: EntityId) {
        let old = std::mem::replace(&mut self.order[index], handle);
        self.members.remove(&old);
        self.members.insert(handle);
    }
}

/// First occurrence of each handle, order preserved.
pub(crate) fn dedup(handles: &[EntityId]) -> Vec<EntityId> {
    let mut seen = HashSet::with_capacity(handles.len());
    handles.iter().copied().filter(|id| seen.insert(*id)).collect()
}
