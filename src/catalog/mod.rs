//! Catalog of placeable object kinds.
//!
//! Each kind carries its grid footprint plus the per-kind settings the
//! placement and removal logic look up by name (resting height, protection,
//! spawn pose).

pub mod kind;
pub mod library;

pub use kind::{KindCategory, PlaceableKind};
pub use library::Catalog;
