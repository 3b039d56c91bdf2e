//! Scene graph node types
//!
//! Core types for the CPU-side scene graph: node IDs, transforms, content variants, and nodes.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::math::Aabb;
use crate::terrain::{BlockKind, GridCoord};

/// Unique identifier for a scene graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneNodeId(pub u64);

/// Local transform relative to the parent node.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    /// Identity transform (no translation, rotation, or scaling).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.position,
        )
    }
}

/// What a scene node contains.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    /// A grouping node with no geometry of its own.
    Group,

    /// One box of a terrain column.
    TerrainBlock { kind: BlockKind, cell: GridCoord },

    /// Line grid drawn over the terrain.
    GridOverlay { size: f32, divisions: u32 },

    /// Sky dome.
    Sky { radius: f32 },

    /// Flat placement cursor. `extent` is the unrotated rectangle in world units.
    Highlight { extent: Vec2, color: u32 },

    /// A placed (or pending) catalog object.
    Prop { kind: String },
}

impl NodeContent {
    /// Scene fixtures are never removable and never selectable for placement.
    pub fn is_fixture(&self) -> bool {
        matches!(
            self,
            NodeContent::TerrainBlock { .. }
                | NodeContent::GridOverlay { .. }
                | NodeContent::Sky { .. }
                | NodeContent::Highlight { .. }
        )
    }

    /// Top surface blocks that props can be dropped onto.
    pub fn is_ground(&self) -> bool {
        matches!(self, NodeContent::TerrainBlock { kind: BlockKind::Grass, .. })
    }

    /// Catalog kind name for props.
    pub fn prop_kind(&self) -> Option<&str> {
        match self {
            NodeContent::Prop { kind } => Some(kind),
            _ => None,
        }
    }
}

/// A single node in the scene graph.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    pub name: String,
    pub parent: Option<SceneNodeId>,
    pub children: Vec<SceneNodeId>,
    pub local_transform: LocalTransform,
    /// Cached world transform (recomputed during propagation).
    pub world_transform: Mat4,
    pub visible: bool,
    /// Pick volume in local space; nodes without bounds are never hit.
    pub bounds: Option<Aabb>,
    pub content: NodeContent,
}

impl SceneNode {
    /// Create a new scene node.
    pub fn new(id: SceneNodeId, name: impl Into<String>, content: NodeContent) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            local_transform: LocalTransform::identity(),
            world_transform: Mat4::IDENTITY,
            visible: true,
            bounds: None,
            content,
        }
    }
}
