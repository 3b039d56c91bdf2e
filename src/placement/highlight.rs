//! Placement cursor drawn flat on the terrain

use glam::{Vec2, Vec3};

use super::footprint::{Footprint, QuarterTurns};
use crate::scene::{LocalTransform, NodeContent, SceneGraph, SceneNodeId};

/// Handle to the highlight node plus a mirror of its state.
///
/// `extent` is the unrotated rectangle; the node's yaw carries the rotation so
/// the drawn rectangle covers the rotated footprint.
#[derive(Clone, Debug)]
pub struct HighlightCursor {
    node: SceneNodeId,
    extent: Vec2,
    turns: QuarterTurns,
    color: u32,
    position: Vec3,
}

impl HighlightCursor {
    /// Add a one-cell highlight to the scene. It has no pick bounds.
    pub fn spawn(scene: &mut SceneGraph, grid_unit: f32, color: u32, position: Vec3) -> Self {
        let extent = Footprint::UNIT.world_extent(grid_unit);
        let node = scene.add_object(
            "highlight",
            NodeContent::Highlight { extent, color },
            LocalTransform::from_position(position),
            None,
        );
        Self {
            node,
            extent,
            turns: QuarterTurns::ZERO,
            color,
            position,
        }
    }

    pub fn node(&self) -> SceneNodeId {
        self.node
    }

    /// Unrotated extent in world units
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Extent along world X and Z after rotation
    pub fn world_extent(&self) -> Vec2 {
        if self.turns.is_odd() { Vec2::new(self.extent.y, self.extent.x) } else { self.extent }
    }

    pub fn turns(&self) -> QuarterTurns {
        self.turns
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Resize, rotate and recolor in one step
    pub fn configure(&mut self, scene: &mut SceneGraph, extent: Vec2, turns: QuarterTurns, color: u32) {
        self.extent = extent;
        self.turns = turns;
        self.color = color;
        self.sync(scene);
    }

    pub fn set_turns(&mut self, scene: &mut SceneGraph, turns: QuarterTurns) {
        self.turns = turns;
        self.sync(scene);
    }

    pub fn move_to(&mut self, scene: &mut SceneGraph, position: Vec3) {
        self.position = position;
        scene.set_position(self.node, position);
    }

    /// Back to an unrotated one-cell cursor in `color`
    pub fn reset(&mut self, scene: &mut SceneGraph, grid_unit: f32, color: u32) {
        self.configure(scene, Footprint::UNIT.world_extent(grid_unit), QuarterTurns::ZERO, color);
    }

    fn sync(&self, scene: &mut SceneGraph) {
        let Some(node) = scene.get_mut(self.node) else {
            log::warn!("Highlight node {:?} is missing from the scene", self.node);
            return;
        };
        node.content = NodeContent::Highlight {
            extent: self.extent,
            color: self.color,
        };
        node.local_transform = LocalTransform {
            position: self.position,
            rotation: self.turns.to_quat(),
            scale: 1.0,
        };
    }
}
