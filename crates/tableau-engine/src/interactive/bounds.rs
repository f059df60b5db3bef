use std::collections::HashMap;

use crate::coords::Rect;
use crate::entity::EntityId;

/// Supplies current entity bounds for hit lookup.
///
/// The store never owns geometry, so bounds are asked for at query time from
/// whichever layer does (typically the geometry or layout layer). Returning
/// `None` makes the entity unpickable for that query.
pub trait BoundsSource {
    fn bounds(&self, id: EntityId) -> Option<Rect>;
}

impl<F> BoundsSource for F
where
    F: Fn(EntityId) -> Option<Rect>,
{
    #[inline]
    fn bounds(&self, id: EntityId) -> Option<Rect> {
        self(id)
    }
}

impl BoundsSource for HashMap<EntityId, Rect> {
    #[inline]
    fn bounds(&self, id: EntityId) -> Option<Rect> {
        self.get(&id).copied()
    }
}
