//! Geometry types used for hit lookup.
//!
//! Canonical space:
//! - Logical units
//! - Origin top-left
//! - +X right, +Y down
//!
//! Entity geometry itself lives outside the engine; these types only carry the
//! bounds an external layer reports for picking.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
