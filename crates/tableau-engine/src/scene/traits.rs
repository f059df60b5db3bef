use crate::entity::EntityId;

use super::SceneStore;

/// Membership contract shared by [`SceneStore`] and
/// [`InteractiveScene`](crate::interactive::InteractiveScene).
///
/// The render loop reads [`live_entities`](Scene::live_entities) in order each
/// frame; authoring code mutates through the chaining methods. Code written
/// against `impl Scene` works with either store.
pub trait Scene {
    /// The privileged camera-frame entity.
    fn viewport(&self) -> EntityId;

    /// Live entities in render order (back-to-front).
    fn live_entities(&self) -> &[EntityId];

    fn contains(&self, handle: EntityId) -> bool;

    fn add(&mut self, handles: &[EntityId]) -> &mut Self;

    fn remove(&mut self, handles: &[EntityId]) -> &mut Self;

    fn clear(&mut self) -> &mut Self;

    /// Keeps only `keep` plus the entities the store always preserves.
    fn clear_all_except(&mut self, keep: &[EntityId]) -> &mut Self;

    /// Live entities other than the viewport.
    fn content(&self) -> Vec<EntityId> {
        let viewport = self.viewport();
        self.live_entities()
            .iter()
            .copied()
            .filter(|&id| id != viewport)
            .collect()
    }
}

impl Scene for SceneStore {
    #[inline]
    fn viewport(&self) -> EntityId {
        SceneStore::viewport(self)
    }

    #[inline]
    fn live_entities(&self) -> &[EntityId] {
        SceneStore::live_entities(self)
    }

    #[inline]
    fn contains(&self, handle: EntityId) -> bool {
        SceneStore::contains(self, handle)
    }

    fn add(&mut self, handles: &[EntityId]) -> &mut Self {
        SceneStore::add(self, handles)
    }

    fn remove(&mut self, handles: &[EntityId]) -> &mut Self {
        SceneStore::remove(self, handles)
    }

    fn clear(&mut self) -> &mut Self {
        SceneStore::clear(self)
    }

    fn clear_all_except(&mut self, keep: &[EntityId]) -> &mut Self {
        SceneStore::clear_all_except(self, keep)
    }
}
