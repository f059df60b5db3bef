//! Interactive scene: a [`SceneStore`](crate::scene::SceneStore) that also
//! maintains a selection index for hit testing.
//!
//! # How the index stays fresh
//!
//! 1. Every membership mutation on [`InteractiveScene`] first edits the store.
//! 2. Before the call returns, [`SelectionIndex`] is rebuilt from scratch as
//!    `live entities \ unselectables`, in render order.
//! 3. The user selection is then pruned to entities still in the index.
//!
//! There is no incremental update path, so no caller can observe a stale index.

mod bounds;
mod index;
mod scene;
mod unselectable;

pub use bounds::BoundsSource;
pub use index::SelectionIndex;
pub use scene::{InteractiveScene, SelectionMode};
pub use unselectable::UnselectableSet;
