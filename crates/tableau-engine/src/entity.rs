//! Entity handles.
//!
//! The store never owns entities. Geometry, paint and animation state live in
//! external layers; the store only tracks membership and order by [`EntityId`].

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity handle for a renderable entity.
///
/// Equality is identity: two entities with identical visual properties still
/// get distinct ids. Ids only come from [`EntityId::new`], once per entity,
/// so no two entities can ever share a handle.
///
/// A handle whose entity has been destroyed by its owner is still accepted by
/// every store operation; keeping handles meaningful is the caller's job.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Raw value 0 is reserved and never handed out by [`EntityId::new`].
    pub const INVALID: Self = Self(0);

    /// Allocate a new, process-wide unique `EntityId`.
    pub fn new() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
