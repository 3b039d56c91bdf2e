//! Procedural block terrain

pub mod noise;
pub use noise::{fbm, noise2d, FbmParams};

pub mod generator;
pub use generator::{terrain_height, HeightParams, TerrainHeightGenerator};

pub mod grid;
pub use grid::{GridCell, GridCoord, TerrainGrid};

pub mod blocks;
pub use blocks::{BlockKind, BlockLayout, GridOverlay, TerrainBlock};
