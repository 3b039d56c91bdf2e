//! Homestead - grid placement and procedural block terrain for a farm scene builder

pub mod core;
pub mod math;
pub mod terrain;
pub mod catalog;
pub mod scene;
pub mod placement;
pub mod environment;
