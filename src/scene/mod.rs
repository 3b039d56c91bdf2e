//! Scene graph, configuration and the input-facing scene manager

pub mod config;
pub mod graph;
pub mod manager;
pub mod node;

pub use config::SceneConfig;
pub use graph::{SceneGraph, SceneHit};
pub use manager::{InputOutcome, SceneManager};
pub use node::{LocalTransform, NodeContent, SceneNode, SceneNodeId};
