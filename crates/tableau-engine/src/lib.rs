//! Tableau engine crate.
//!
//! This crate owns the retained entity store that sits between authoring code
//! and the renderer: which entities are live, in what order they draw, and
//! which of them can be picked interactively.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entity`] | `EntityId` handles |
//! | [`coords`] | `Vec2`, `Rect` used for hit lookup |
//! | [`scene`] | `OrderedEntitySet`, `SceneStore`, the `Scene` trait |
//! | [`interactive`] | `InteractiveScene`, `SelectionIndex`, `UnselectableSet` |
//! | [`logging`] | logger initialization |
//!
//! # Quick start
//!
//! ```rust
//! use tableau_engine::prelude::*;
//!
//! let mut scene = SceneStore::new();
//! let (circle, square) = (EntityId::new(), EntityId::new());
//!
//! scene.add(&[circle, square]).clear_all_except(&[circle]);
//! assert_eq!(scene.live_entities(), &[scene.viewport(), circle]);
//! ```

pub mod coords;
pub mod entity;
pub mod interactive;
pub mod logging;
pub mod scene;

/// Common imports for code that builds or drives a scene.
pub mod prelude {
    pub use crate::coords::{Rect, Vec2};
    pub use crate::entity::EntityId;
    pub use crate::interactive::{BoundsSource, InteractiveScene, SelectionIndex, UnselectableSet};
    pub use crate::scene::{OrderedEntitySet, Scene, SceneStore};
}
