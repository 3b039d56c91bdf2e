//! Scene graph: CPU-side hierarchy of nodes.
//!
//! Props, terrain blocks and fixtures hang off a single root. Objects directly
//! below the root are the units the user selects, moves and deletes; their
//! descendants are parts of the same object.

use std::collections::HashMap;

use glam::{Mat4, Vec3};

use crate::math::{Aabb, Ray};

use super::node::{LocalTransform, NodeContent, SceneNode, SceneNodeId};

/// Result of a scene raycast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit {
    /// The node whose bounds were hit
    pub leaf: SceneNodeId,
    /// The top-level object that owns `leaf` (its ancestor directly below the root)
    pub root_object: SceneNodeId,
    /// World-space point where the ray entered the leaf's bounds
    pub point: Vec3,
    /// Distance along the ray
    pub distance: f32,
}

/// CPU-side scene graph.
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    root: SceneNodeId,
    next_id: u64,
    dirty: bool,
}

impl SceneGraph {
    /// Create a new scene graph with a root Group node.
    pub fn new() -> Self {
        let root_id = SceneNodeId(0);
        let root_node = SceneNode::new(root_id, "root", NodeContent::Group);

        let mut nodes = HashMap::new();
        nodes.insert(root_id, root_node);

        Self {
            nodes,
            root: root_id,
            next_id: 1,
            dirty: true,
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> SceneNodeId {
        self.root
    }

    /// Allocate a fresh node ID.
    fn alloc_id(&mut self) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a child node under `parent`. Returns the new node's ID.
    pub fn add_child(
        &mut self,
        parent: SceneNodeId,
        name: impl Into<String>,
        content: NodeContent,
    ) -> SceneNodeId {
        let id = self.alloc_id();
        let mut node = SceneNode::new(id, name, content);
        node.parent = Some(parent);

        self.nodes.insert(id, node);

        // Register as child of parent
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }

        self.dirty = true;
        id
    }

    /// Add a top-level object with a transform and pick bounds.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        content: NodeContent,
        transform: LocalTransform,
        bounds: Option<Aabb>,
    ) -> SceneNodeId {
        let id = self.add_child(self.root, name, content);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local_transform = transform;
            node.bounds = bounds;
        }
        id
    }

    /// Remove a node and its entire subtree. Cannot remove the root.
    pub fn remove(&mut self, id: SceneNodeId) {
        if id == self.root {
            return;
        }

        // Collect subtree IDs (BFS)
        let mut to_remove = vec![id];
        let mut i = 0;
        while i < to_remove.len() {
            let current = to_remove[i];
            if let Some(node) = self.nodes.get(&current) {
                to_remove.extend_from_slice(&node.children);
            }
            i += 1;
        }

        // Detach from parent
        if let Some(parent_id) = self.nodes.get(&id).and_then(|n| n.parent) {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|c| *c != id);
            }
        }

        // Remove all nodes in subtree
        for nid in to_remove {
            self.nodes.remove(&nid);
        }

        self.dirty = true;
    }

    /// Set the local transform of a node.
    pub fn set_transform(&mut self, id: SceneNodeId, transform: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local_transform = transform;
            self.dirty = true;
        }
    }

    /// Set only the position of a node.
    pub fn set_position(&mut self, id: SceneNodeId, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local_transform.position = position;
            self.dirty = true;
        }
    }

    /// Set the visibility of a node.
    pub fn set_visible(&mut self, id: SceneNodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.visible = visible;
        }
    }

    /// Get an immutable reference to a node.
    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node.
    pub fn get_mut(&mut self, id: SceneNodeId) -> Option<&mut SceneNode> {
        self.dirty = true;
        self.nodes.get_mut(&id)
    }

    /// Whether a node exists.
    pub fn contains(&self, id: SceneNodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: SceneNodeId) -> impl Iterator<Item = SceneNodeId> + '_ {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Iterate over all nodes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes.values()
    }

    /// Total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk up from `id` to the ancestor directly below the root.
    ///
    /// Returns `id` itself for top-level objects and `None` for the root or
    /// unknown nodes.
    pub fn root_object(&self, id: SceneNodeId) -> Option<SceneNodeId> {
        if id == self.root {
            return None;
        }
        let mut current = self.nodes.get(&id)?;
        while let Some(parent) = current.parent {
            if parent == self.root {
                return Some(current.id);
            }
            current = self.nodes.get(&parent)?;
        }
        None
    }

    /// Whether the node and all of its ancestors are visible.
    pub fn is_visible_in_tree(&self, id: SceneNodeId) -> bool {
        let mut current = id;
        loop {
            let Some(node) = self.nodes.get(&current) else {
                return false;
            };
            if !node.visible {
                return false;
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return true,
            }
        }
    }

    /// Recompute world transforms if anything moved since the last update.
    pub fn update_transforms(&mut self) {
        if self.dirty {
            self.propagate_transforms(self.root, Mat4::IDENTITY);
            self.dirty = false;
        }
    }

    /// World-space pick bounds of a node.
    pub fn world_bounds(&mut self, id: SceneNodeId) -> Option<Aabb> {
        self.update_transforms();
        let node = self.nodes.get(&id)?;
        node.bounds.map(|b| b.transformed(&node.world_transform))
    }

    /// Nearest visible node hit by the ray.
    pub fn raycast(&mut self, ray: &Ray) -> Option<SceneHit> {
        self.raycast_filtered(ray, |_| true)
    }

    /// Nearest visible node hit by the ray among nodes accepted by `filter`.
    pub fn raycast_filtered<F>(&mut self, ray: &Ray, filter: F) -> Option<SceneHit>
    where
        F: Fn(&SceneNode) -> bool,
    {
        self.update_transforms();

        let mut best: Option<(SceneNodeId, Vec3, f32)> = None;
        self.collect_hits(self.root, ray, &filter, &mut best);

        let (leaf, point, distance) = best?;
        let root_object = self.root_object(leaf)?;
        Some(SceneHit {
            leaf,
            root_object,
            point,
            distance,
        })
    }

    /// Recursively propagate world transforms.
    fn propagate_transforms(&mut self, node_id: SceneNodeId, parent_world: Mat4) {
        // Compute this node's world transform
        let (local_mat, children) = {
            let node = match self.nodes.get(&node_id) {
                Some(n) => n,
                None => return,
            };
            (node.local_transform.to_mat4(), node.children.clone())
        };

        let world = parent_world * local_mat;

        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.world_transform = world;
        }

        for child_id in children {
            self.propagate_transforms(child_id, world);
        }
    }

    /// Recursively test visible nodes, keeping the nearest hit.
    fn collect_hits<F>(
        &self,
        node_id: SceneNodeId,
        ray: &Ray,
        filter: &F,
        best: &mut Option<(SceneNodeId, Vec3, f32)>,
    ) where
        F: Fn(&SceneNode) -> bool,
    {
        let node = match self.nodes.get(&node_id) {
            Some(n) => n,
            None => return,
        };

        if !node.visible {
            return;
        }

        if let Some(bounds) = node.bounds {
            if filter(node) {
                let world = bounds.transformed(&node.world_transform);
                if let Some((point, t)) = ray.hit_point(&world) {
                    if best.map_or(true, |(_, _, best_t)| t < best_t) {
                        *best = Some((node_id, point, t));
                    }
                }
            }
        }

        for &child_id in &node.children {
            self.collect_hits(child_id, ray, filter, best);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn unit_box() -> Option<Aabb> {
        Some(Aabb::from_center_half_extent(Vec3::ZERO, Vec3::splat(1.0)))
    }

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 100.0, z), -Vec3::Y)
    }

    fn prop(kind: &str) -> NodeContent {
        NodeContent::Prop { kind: kind.to_string() }
    }

    #[test]
    fn test_new_scene_graph() {
        let graph = SceneGraph::new();
        assert_eq!(graph.node_count(), 1); // root only
        assert!(graph.get(graph.root()).is_some());
        assert_eq!(graph.get(graph.root()).unwrap().name, "root");
    }

    #[test]
    fn test_add_child() {
        let mut graph = SceneGraph::new();
        let root = graph.root();

        let child = graph.add_child(root, "terrain", NodeContent::Group);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get(child).unwrap().parent, Some(root));
        assert!(graph.children(root).any(|c| c == child));
    }

    #[test]
    fn test_remove_subtree() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let parent = graph.add_child(root, "parent", NodeContent::Group);
        let child1 = graph.add_child(parent, "c1", NodeContent::Group);
        let child2 = graph.add_child(parent, "c2", NodeContent::Group);
        let _grandchild = graph.add_child(child1, "gc", NodeContent::Group);

        assert_eq!(graph.node_count(), 5);

        graph.remove(parent);

        assert_eq!(graph.node_count(), 1); // only root
        assert!(graph.get(parent).is_none());
        assert!(graph.get(child1).is_none());
        assert!(graph.get(child2).is_none());
        assert_eq!(graph.children(root).count(), 0);
    }

    #[test]
    fn test_cannot_remove_root() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        graph.remove(root);
        assert_eq!(graph.node_count(), 1); // root survives
    }

    #[test]
    fn test_set_visible() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let child = graph.add_child(root, "child", NodeContent::Group);

        graph.set_visible(child, false);
        assert!(!graph.get(child).unwrap().visible);

        graph.set_visible(child, true);
        assert!(graph.get(child).unwrap().visible);
    }

    #[test]
    fn test_set_transform() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let child = graph.add_child(root, "child", NodeContent::Group);

        let t = LocalTransform::from_position(Vec3::new(10.0, 0.0, 5.0));
        graph.set_transform(child, t);

        let node = graph.get(child).unwrap();
        assert_eq!(node.local_transform.position, Vec3::new(10.0, 0.0, 5.0));
    }

    #[test]
    fn test_root_object_walks_ownership_chain() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let barn = graph.add_child(root, "Barn", prop("Barn"));
        let roof = graph.add_child(barn, "roof", NodeContent::Group);
        let vane = graph.add_child(roof, "vane", NodeContent::Group);

        assert_eq!(graph.root_object(vane), Some(barn));
        assert_eq!(graph.root_object(roof), Some(barn));
        assert_eq!(graph.root_object(barn), Some(barn));
        assert_eq!(graph.root_object(root), None);
        assert_eq!(graph.root_object(SceneNodeId(999)), None);
    }

    #[test]
    fn test_world_bounds_follow_parent_transform() {
        let mut graph = SceneGraph::new();
        let parent = graph.add_object(
            "parent",
            NodeContent::Group,
            LocalTransform::from_position(Vec3::new(10.0, 0.0, 0.0)),
            None,
        );
        let child = graph.add_child(parent, "child", NodeContent::Group);
        graph.set_transform(child, LocalTransform::from_position(Vec3::new(5.0, 0.0, 0.0)));
        graph.get_mut(child).unwrap().bounds = unit_box();

        let bounds = graph.world_bounds(child).unwrap();
        assert!((bounds.center() - Vec3::new(15.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_raycast_nearest_hit() {
        let mut graph = SceneGraph::new();
        let low = graph.add_object(
            "low",
            prop("Hay"),
            LocalTransform::from_position(Vec3::new(0.0, 0.0, 0.0)),
            unit_box(),
        );
        let high = graph.add_object(
            "high",
            prop("Hay"),
            LocalTransform::from_position(Vec3::new(0.0, 5.0, 0.0)),
            unit_box(),
        );

        let hit = graph.raycast(&down_ray(0.2, 0.3)).unwrap();
        assert_eq!(hit.leaf, high);
        assert_eq!(hit.root_object, high);
        assert!((hit.point.y - 6.0).abs() < 1e-4);

        graph.set_visible(high, false);
        let hit = graph.raycast(&down_ray(0.2, 0.3)).unwrap();
        assert_eq!(hit.leaf, low);
    }

    #[test]
    fn test_raycast_miss() {
        let mut graph = SceneGraph::new();
        graph.add_object("a", prop("Hay"), LocalTransform::identity(), unit_box());
        assert!(graph.raycast(&down_ray(30.0, 30.0)).is_none());
    }

    #[test]
    fn test_raycast_reports_owner_of_child_part() {
        let mut graph = SceneGraph::new();
        let cow = graph.add_object(
            "Cow",
            prop("Cow"),
            LocalTransform::from_position(Vec3::new(4.0, 6.0, 4.0)),
            None,
        );
        let body = graph.add_child(cow, "body", NodeContent::Group);
        graph.get_mut(body).unwrap().bounds = unit_box();

        let hit = graph.raycast(&down_ray(4.3, 4.1)).unwrap();
        assert_eq!(hit.leaf, body);
        assert_eq!(hit.root_object, cow);
    }

    #[test]
    fn test_hidden_parent_hides_children() {
        let mut graph = SceneGraph::new();
        let cow = graph.add_object("Cow", prop("Cow"), LocalTransform::identity(), None);
        let body = graph.add_child(cow, "body", NodeContent::Group);
        graph.get_mut(body).unwrap().bounds = unit_box();

        graph.set_visible(cow, false);
        assert!(!graph.is_visible_in_tree(body));
        assert!(graph.raycast(&down_ray(0.1, 0.1)).is_none());
    }

    #[test]
    fn test_raycast_filtered() {
        let mut graph = SceneGraph::new();
        let ground = graph.add_object(
            "Grass",
            NodeContent::TerrainBlock {
                kind: crate::terrain::BlockKind::Grass,
                cell: crate::terrain::GridCoord::new(0, 0),
            },
            LocalTransform::identity(),
            unit_box(),
        );
        graph.add_object(
            "Tree",
            prop("Tree"),
            LocalTransform::from_position(Vec3::new(0.0, 3.0, 0.0)),
            unit_box(),
        );

        let hit = graph.raycast_filtered(&down_ray(0.1, 0.2), |n| n.content.is_ground()).unwrap();
        assert_eq!(hit.leaf, ground);
    }

    #[test]
    fn test_rotated_bounds_hit() {
        let mut graph = SceneGraph::new();
        let long = Some(Aabb::from_center_half_extent(Vec3::ZERO, Vec3::new(3.0, 1.0, 0.5)));
        let fence = graph.add_object(
            "Fence",
            prop("Fence"),
            LocalTransform {
                position: Vec3::ZERO,
                rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                scale: 1.0,
            },
            long,
        );
        // After a quarter turn the long side runs along Z
        assert!(graph.raycast(&down_ray(0.1, 2.5)).is_some());
        assert!(graph.raycast(&down_ray(2.5, 0.1)).is_none());
        assert_eq!(graph.raycast(&down_ray(0.1, 2.5)).unwrap().root_object, fence);
    }
}
