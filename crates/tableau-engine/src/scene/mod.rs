//! Live entity membership.
//!
//! Responsibilities:
//! - keep the deduplicated, render-ordered set of live entities
//! - keep the viewport entity alive through selective clears
//! - expose one [`Scene`] surface for plain and interactive stores

mod set;
mod store;
mod traits;

pub use set::OrderedEntitySet;
pub use store::SceneStore;
pub use traits::Scene;
