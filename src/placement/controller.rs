//! Single-slot placement state machine.
//!
//! `Idle` until an object is picked up; `Placing` while its footprint follows
//! the pointer. The object stays hidden until the drop commits it.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use super::footprint::{Footprint, QuarterTurns};
use super::highlight::HighlightCursor;
use super::snap::snap_point;
use crate::catalog::Catalog;
use crate::scene::config::SceneConfig;
use crate::scene::{LocalTransform, SceneGraph, SceneNodeId};

/// Tuning shared by the controller and its cursor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementSettings {
    pub grid_unit: f32,
    /// Cursor height above the surface it was hovered on
    pub highlight_lift: f32,
    /// Surface elevation of an unraised cell; rest heights are relative to it
    pub grass_top: f32,
    pub idle_color: u32,
    pub placing_color: u32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl PlacementSettings {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            grid_unit: config.grid_unit,
            highlight_lift: config.highlight_lift,
            grass_top: config.blocks.grass_top,
            idle_color: config.palette.highlight,
            placing_color: config.palette.highlight_placing,
        }
    }
}

/// Where the candidate object came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOrigin {
    /// Freshly spawned from the catalog; cancelling discards it
    Spawned,
    /// Already in the scene; cancelling puts it back
    Existing,
}

/// The object being moved and its preview state
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPlacement {
    pub object: SceneNodeId,
    pub kind: String,
    /// Footprint in world orientation (already swapped for odd turns)
    pub footprint: Footprint,
    pub turns: QuarterTurns,
    /// Snapped cursor position
    pub cursor: Vec3,
    pub origin: PlacementOrigin,
    /// Last raw ground point under the pointer
    pub last_pointer: Option<Vec3>,
    pub rest_height: f32,
    /// Pose at pickup, restored on cancel
    pub original: LocalTransform,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlacementState {
    Idle,
    Placing(PendingPlacement),
}

/// Outcome of a controller operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementEvent {
    Started { object: SceneNodeId },
    /// Idle hover cursor moved
    Hovered { cursor: Vec3 },
    Moved { cursor: Vec3 },
    Rotated { turns: QuarterTurns, footprint: Footprint },
    Committed { object: SceneNodeId, position: Vec3 },
    Cancelled { object: SceneNodeId, discarded: bool },
    /// Nothing happened
    Ignored,
}

pub struct PlacementController {
    settings: PlacementSettings,
    state: PlacementState,
    highlight: HighlightCursor,
}

impl PlacementController {
    /// Create the controller and add its cursor to the scene.
    pub fn new(scene: &mut SceneGraph, settings: PlacementSettings) -> Self {
        let start = Vec3::new(0.0, settings.grass_top + settings.highlight_lift, 0.0);
        let highlight = HighlightCursor::spawn(scene, settings.grid_unit, settings.idle_color, start);
        Self {
            settings,
            state: PlacementState::Idle,
            highlight,
        }
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn is_placing(&self) -> bool {
        matches!(self.state, PlacementState::Placing(_))
    }

    pub fn pending(&self) -> Option<&PendingPlacement> {
        match &self.state {
            PlacementState::Placing(pending) => Some(pending),
            PlacementState::Idle => None,
        }
    }

    pub fn highlight(&self) -> &HighlightCursor {
        &self.highlight
    }

    /// Pick up `object` for placement.
    ///
    /// The object must be a prop whose kind is in the catalog. A placement
    /// already in progress for another object is cancelled first.
    pub fn begin_placement(
        &mut self,
        scene: &mut SceneGraph,
        catalog: &Catalog,
        object: SceneNodeId,
        origin: PlacementOrigin,
    ) -> PlacementEvent {
        let Some(node) = scene.get(object) else {
            log::warn!("Cannot place {:?}: not in the scene", object);
            return PlacementEvent::Ignored;
        };
        let Some(kind_name) = node.content.prop_kind() else {
            log::warn!("Cannot place '{}': not a placeable object", node.name);
            return PlacementEvent::Ignored;
        };
        let Some(kind) = catalog.get(kind_name) else {
            log::warn!("Cannot place '{}': unknown kind '{}'", node.name, kind_name);
            return PlacementEvent::Ignored;
        };
        let turns = QuarterTurns::from_rotation(node.local_transform.rotation);
        let original = node.local_transform.clone();

        if let Some(pending) = self.pending() {
            if pending.object == object {
                return PlacementEvent::Ignored;
            }
            self.cancel(scene);
        }

        let footprint = kind.footprint().rotated_by(turns);
        let extent = kind.footprint().world_extent(self.settings.grid_unit);
        self.highlight
            .configure(scene, extent, turns, self.settings.placing_color);

        let here = self.highlight.position();
        let snapped = snap_point(here, self.settings.grid_unit, footprint);
        let cursor = Vec3::new(snapped.x, here.y, snapped.y);
        self.highlight.move_to(scene, cursor);
        scene.set_visible(object, false);

        log::debug!(
            "Placing {} ({}x{}, {} turns) as {:?}",
            kind.name,
            footprint.width,
            footprint.height,
            turns.count(),
            origin
        );
        self.state = PlacementState::Placing(PendingPlacement {
            object,
            kind: kind.name.clone(),
            footprint,
            turns,
            cursor,
            origin,
            last_pointer: None,
            rest_height: kind.rest_height,
            original,
        });
        PlacementEvent::Started { object }
    }

    /// Track the ground point under the pointer.
    pub fn on_pointer_move(&mut self, scene: &mut SceneGraph, point: Vec3) -> PlacementEvent {
        let settings = self.settings;
        match &mut self.state {
            PlacementState::Idle => {
                let snapped = snap_point(point, settings.grid_unit, Footprint::UNIT);
                let cursor = Vec3::new(snapped.x, point.y + settings.highlight_lift, snapped.y);
                self.highlight.move_to(scene, cursor);
                PlacementEvent::Hovered { cursor }
            }
            PlacementState::Placing(pending) => {
                pending.last_pointer = Some(point);
                let snapped = snap_point(point, settings.grid_unit, pending.footprint);
                pending.cursor = Vec3::new(snapped.x, point.y + settings.highlight_lift, snapped.y);
                let cursor = pending.cursor;
                self.highlight.move_to(scene, cursor);
                PlacementEvent::Moved { cursor }
            }
        }
    }

    /// Turn the pending object a quarter turn about world up.
    pub fn on_rotate(&mut self, scene: &mut SceneGraph) -> PlacementEvent {
        let settings = self.settings;
        let PlacementState::Placing(pending) = &mut self.state else {
            return PlacementEvent::Ignored;
        };

        if let Some(node) = scene.get_mut(pending.object) {
            let rotation = Quat::from_rotation_y(FRAC_PI_2) * node.local_transform.rotation;
            node.local_transform.rotation = rotation.normalize();
        }
        pending.turns = pending.turns.next();
        pending.footprint = pending.footprint.rotated();

        // Parity may have changed on either axis
        let (anchor, surface) = match pending.last_pointer {
            Some(p) => (p, p.y + settings.highlight_lift),
            None => (pending.cursor, pending.cursor.y),
        };
        let snapped = snap_point(anchor, settings.grid_unit, pending.footprint);
        pending.cursor = Vec3::new(snapped.x, surface, snapped.y);

        let (turns, footprint, cursor) = (pending.turns, pending.footprint, pending.cursor);
        self.highlight.set_turns(scene, turns);
        self.highlight.move_to(scene, cursor);
        log::debug!("Rotated to {} turns, footprint {}x{}", turns.count(), footprint.width, footprint.height);
        PlacementEvent::Rotated { turns, footprint }
    }

    /// Drop the pending object at the ground point under the pointer.
    ///
    /// `None` (pointer off the terrain) keeps the placement pending.
    pub fn on_pointer_down(&mut self, scene: &mut SceneGraph, ground_hit: Option<Vec3>) -> PlacementEvent {
        let Some(hit) = ground_hit else {
            return PlacementEvent::Ignored;
        };
        let PlacementState::Placing(pending) = &self.state else {
            return PlacementEvent::Ignored;
        };

        let snapped = snap_point(hit, self.settings.grid_unit, pending.footprint);
        let position = Vec3::new(
            snapped.x,
            pending.rest_height + (hit.y - self.settings.grass_top),
            snapped.y,
        );
        let object = pending.object;
        scene.set_position(object, position);
        scene.set_visible(object, true);

        log::debug!("Committed {} at {}", pending.kind, position);
        self.finish(scene);
        PlacementEvent::Committed { object, position }
    }

    /// Abandon the pending placement.
    pub fn cancel(&mut self, scene: &mut SceneGraph) -> PlacementEvent {
        let PlacementState::Placing(pending) = &self.state else {
            return PlacementEvent::Ignored;
        };
        let object = pending.object;
        let discarded = match pending.origin {
            PlacementOrigin::Spawned => {
                scene.remove(object);
                true
            }
            PlacementOrigin::Existing => {
                scene.set_transform(object, pending.original.clone());
                scene.set_visible(object, true);
                false
            }
        };
        log::debug!("Cancelled placement of {}", pending.kind);
        self.finish(scene);
        PlacementEvent::Cancelled { object, discarded }
    }

    fn finish(&mut self, scene: &mut SceneGraph) {
        self.state = PlacementState::Idle;
        self.highlight
            .reset(scene, self.settings.grid_unit, self.settings.idle_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KindCategory, PlaceableKind};
    use crate::math::Aabb;
    use crate::scene::NodeContent;
    use glam::Vec2;
    use std::f32::consts::TAU;

    const LIFT: f32 = 0.05;

    fn setup() -> (SceneGraph, Catalog, PlacementController) {
        let mut scene = SceneGraph::new();
        let controller = PlacementController::new(&mut scene, PlacementSettings::default());
        (scene, Catalog::builtin(), controller)
    }

    fn add_prop(scene: &mut SceneGraph, kind: &str, transform: LocalTransform) -> SceneNodeId {
        scene.add_object(
            kind,
            NodeContent::Prop { kind: kind.to_string() },
            transform,
            Some(Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0))),
        )
    }

    #[test]
    fn test_begin_hides_and_configures_highlight() {
        let (mut scene, catalog, mut ctl) = setup();
        let barn = add_prop(&mut scene, "Barn", LocalTransform::identity());

        let event = ctl.begin_placement(&mut scene, &catalog, barn, PlacementOrigin::Spawned);
        assert_eq!(event, PlacementEvent::Started { object: barn });
        assert!(ctl.is_placing());
        assert!(!scene.get(barn).unwrap().visible);

        let pending = ctl.pending().unwrap();
        assert_eq!(pending.footprint, Footprint::new(5, 3));
        assert_eq!(pending.rest_height, 7.0);
        assert_eq!(ctl.highlight().extent(), Vec2::new(10.0, 6.0));
        assert_eq!(ctl.highlight().color(), 0x66FF00);
    }

    #[test]
    fn test_begin_uses_current_yaw() {
        let (mut scene, catalog, mut ctl) = setup();
        let transform = LocalTransform {
            rotation: Quat::from_rotation_y(FRAC_PI_2),
            ..Default::default()
        };
        let pig = add_prop(&mut scene, "Pig", transform);

        ctl.begin_placement(&mut scene, &catalog, pig, PlacementOrigin::Spawned);
        let pending = ctl.pending().unwrap();
        assert_eq!(pending.turns.count(), 1);
        assert_eq!(pending.footprint, Footprint::new(1, 2));
        assert_eq!(ctl.highlight().world_extent(), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_begin_rejects_non_props_and_unknown_kinds() {
        let (mut scene, catalog, mut ctl) = setup();
        let unicorn = add_prop(&mut scene, "Unicorn", LocalTransform::identity());
        let group = scene.add_object("group", NodeContent::Group, LocalTransform::identity(), None);

        assert_eq!(
            ctl.begin_placement(&mut scene, &catalog, unicorn, PlacementOrigin::Existing),
            PlacementEvent::Ignored
        );
        assert_eq!(
            ctl.begin_placement(&mut scene, &catalog, group, PlacementOrigin::Existing),
            PlacementEvent::Ignored
        );
        assert_eq!(
            ctl.begin_placement(&mut scene, &catalog, SceneNodeId(999), PlacementOrigin::Existing),
            PlacementEvent::Ignored
        );
        assert!(!ctl.is_placing());
        assert!(scene.get(unicorn).unwrap().visible);
    }

    #[test]
    fn test_pointer_move_snaps_by_parity() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);

        // Cow is 2x1: x even, z odd
        let event = ctl.on_pointer_move(&mut scene, Vec3::new(5.0, 6.0, 5.0));
        let cursor = Vec3::new(5.0, 6.0 + LIFT, 6.0);
        assert_eq!(event, PlacementEvent::Moved { cursor });
        assert_eq!(ctl.highlight().position(), cursor);
        // The object itself does not follow the pointer
        assert_eq!(scene.get(cow).unwrap().local_transform.position, Vec3::ZERO);
    }

    #[test]
    fn test_even_footprint_offsets_by_half_unit() {
        let (mut scene, catalog, mut ctl) = setup();
        let chicken = add_prop(&mut scene, "Chicken", LocalTransform::identity());
        let windmill = add_prop(&mut scene, "Windmill", LocalTransform::identity());
        let p = Vec3::new(5.0, 6.0, 5.0);

        ctl.begin_placement(&mut scene, &catalog, chicken, PlacementOrigin::Existing);
        ctl.on_pointer_move(&mut scene, p);
        let odd = ctl.highlight().position();
        ctl.cancel(&mut scene);

        ctl.begin_placement(&mut scene, &catalog, windmill, PlacementOrigin::Existing);
        ctl.on_pointer_move(&mut scene, p);
        let even = ctl.highlight().position();

        assert_eq!(even.x - odd.x, -1.0);
        assert_eq!(even.z - odd.z, -1.0);
    }

    #[test]
    fn test_idle_hover_moves_unit_cursor() {
        let (mut scene, _, mut ctl) = setup();
        let event = ctl.on_pointer_move(&mut scene, Vec3::new(-3.2, 8.0, 0.9));
        assert_eq!(event, PlacementEvent::Hovered { cursor: Vec3::new(-4.0, 8.0 + LIFT, 0.0) });
        assert_eq!(ctl.highlight().extent(), Vec2::splat(2.0));
    }

    #[test]
    fn test_rotate_twice_restores_footprint() {
        let (mut scene, catalog, mut ctl) = setup();
        let barn = add_prop(&mut scene, "Barn", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, barn, PlacementOrigin::Spawned);

        ctl.on_rotate(&mut scene);
        assert_eq!(ctl.pending().unwrap().footprint, Footprint::new(3, 5));
        ctl.on_rotate(&mut scene);
        assert_eq!(ctl.pending().unwrap().footprint, Footprint::new(5, 3));
    }

    #[test]
    fn test_rotate_four_times_restores_everything() {
        let (mut scene, catalog, mut ctl) = setup();
        let barn = add_prop(&mut scene, "Barn", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, barn, PlacementOrigin::Spawned);
        ctl.on_pointer_move(&mut scene, Vec3::new(3.3, 6.0, -7.7));
        let before = ctl.highlight().position();

        for _ in 0..4 {
            ctl.on_rotate(&mut scene);
        }

        let pending = ctl.pending().unwrap();
        assert_eq!(pending.footprint, Footprint::new(5, 3));
        assert_eq!(pending.turns, QuarterTurns::ZERO);
        assert_eq!(ctl.highlight().position(), before);
        assert!(ctl.highlight().turns().radians() % TAU < 1e-6);

        let rotation = scene.get(barn).unwrap().local_transform.rotation;
        assert!((rotation * Vec3::X - Vec3::X).length() < 1e-4);
        assert!((rotation * Vec3::Z - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_rotate_resnaps_from_last_pointer() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);
        ctl.on_pointer_move(&mut scene, Vec3::new(5.0, 6.0, 5.0));
        assert_eq!(ctl.highlight().position(), Vec3::new(5.0, 6.0 + LIFT, 6.0));

        let event = ctl.on_rotate(&mut scene);
        assert_eq!(
            event,
            PlacementEvent::Rotated { turns: QuarterTurns::new(1), footprint: Footprint::new(1, 2) }
        );
        assert_eq!(ctl.highlight().position(), Vec3::new(6.0, 6.0 + LIFT, 5.0));
        assert_eq!(ctl.highlight().world_extent(), Vec2::new(2.0, 4.0));

        let yaw = QuarterTurns::from_rotation(scene.get(cow).unwrap().local_transform.rotation);
        assert_eq!(yaw.count(), 1);
    }

    #[test]
    fn test_rotate_in_idle_is_noop() {
        let (mut scene, _, mut ctl) = setup();
        assert_eq!(ctl.on_rotate(&mut scene), PlacementEvent::Ignored);
        assert_eq!(ctl.highlight().turns(), QuarterTurns::ZERO);
    }

    #[test]
    fn test_commit_places_object() {
        let (mut scene, catalog, mut ctl) = setup();
        let fence = add_prop(&mut scene, "Fence", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, fence, PlacementOrigin::Spawned);
        ctl.on_pointer_move(&mut scene, Vec3::new(5.0, 6.0, 5.0));

        let event = ctl.on_pointer_down(&mut scene, Some(Vec3::new(5.0, 6.0, 5.0)));
        let position = Vec3::new(5.0, 7.0, 6.0);
        assert_eq!(event, PlacementEvent::Committed { object: fence, position });

        let node = scene.get(fence).unwrap();
        assert!(node.visible);
        assert_eq!(node.local_transform.position, position);
        assert!(!ctl.is_placing());
        assert_eq!(ctl.highlight().color(), 0xFFFFFF);
        assert_eq!(ctl.highlight().extent(), Vec2::splat(2.0));
    }

    #[test]
    fn test_commit_on_raised_terrain() {
        let (mut scene, catalog, mut ctl) = setup();
        let hay = add_prop(&mut scene, "Hay", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, hay, PlacementOrigin::Spawned);

        // Surface of a height-2 cell sits at 10
        let event = ctl.on_pointer_down(&mut scene, Some(Vec3::new(0.4, 10.0, -0.4)));
        assert_eq!(event, PlacementEvent::Committed { object: hay, position: Vec3::new(0.0, 10.0, 0.0) });
    }

    #[test]
    fn test_click_without_ground_stays_placing() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);

        assert_eq!(ctl.on_pointer_down(&mut scene, None), PlacementEvent::Ignored);
        assert!(ctl.is_placing());
        assert!(!scene.get(cow).unwrap().visible);
    }

    #[test]
    fn test_click_in_idle_is_noop() {
        let (mut scene, _, mut ctl) = setup();
        assert_eq!(ctl.on_pointer_down(&mut scene, Some(Vec3::ZERO)), PlacementEvent::Ignored);
    }

    #[test]
    fn test_cancel_existing_restores() {
        let (mut scene, catalog, mut ctl) = setup();
        let start = Vec3::new(-4.0, 6.0, 2.0);
        let tree = add_prop(&mut scene, "Tree", LocalTransform::from_position(start));
        ctl.begin_placement(&mut scene, &catalog, tree, PlacementOrigin::Existing);
        ctl.on_pointer_move(&mut scene, Vec3::new(9.0, 6.0, 9.0));

        let event = ctl.cancel(&mut scene);
        assert_eq!(event, PlacementEvent::Cancelled { object: tree, discarded: false });
        let node = scene.get(tree).unwrap();
        assert!(node.visible);
        assert_eq!(node.local_transform.position, start);
        assert!(!ctl.is_placing());
    }

    #[test]
    fn test_cancel_spawned_discards() {
        let (mut scene, catalog, mut ctl) = setup();
        let sheep = add_prop(&mut scene, "Sheep", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, sheep, PlacementOrigin::Spawned);

        let event = ctl.cancel(&mut scene);
        assert_eq!(event, PlacementEvent::Cancelled { object: sheep, discarded: true });
        assert!(!scene.contains(sheep));
        assert_eq!(ctl.cancel(&mut scene), PlacementEvent::Ignored);
    }

    #[test]
    fn test_begin_while_placing_cancels_previous() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        let rock = add_prop(&mut scene, "Rock", LocalTransform::identity());

        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);
        ctl.begin_placement(&mut scene, &catalog, rock, PlacementOrigin::Existing);

        assert!(!scene.contains(cow));
        assert_eq!(ctl.pending().unwrap().object, rock);
        assert_eq!(ctl.pending().unwrap().footprint, Footprint::new(2, 2));
    }

    #[test]
    fn test_begin_same_object_twice_is_ignored() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);
        assert_eq!(
            ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned),
            PlacementEvent::Ignored
        );
        assert!(scene.contains(cow));
        assert!(ctl.is_placing());
    }

    #[test]
    fn test_catalog_kind_defined_in_json() {
        let catalog = Catalog::from_kinds(vec![PlaceableKind::new("Silo", KindCategory::Building, 3, 3)]).unwrap();
        let mut scene = SceneGraph::new();
        let mut ctl = PlacementController::new(&mut scene, PlacementSettings::default());
        let silo = add_prop(&mut scene, "Silo", LocalTransform::identity());

        ctl.begin_placement(&mut scene, &catalog, silo, PlacementOrigin::Spawned);
        ctl.on_pointer_move(&mut scene, Vec3::new(5.0, 6.0, 5.0));
        assert_eq!(ctl.highlight().position(), Vec3::new(6.0, 6.0 + LIFT, 6.0));
    }

    #[test]
    fn test_cancel_after_rotate_restores_pose() {
        let (mut scene, catalog, mut ctl) = setup();
        let cow = add_prop(&mut scene, "Cow", LocalTransform::identity());
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Spawned);
        ctl.on_pointer_down(&mut scene, Some(Vec3::new(5.0, 6.0, 5.0)));
        let placed = scene.get(cow).unwrap().local_transform.clone();
        assert_eq!(placed.position, Vec3::new(5.0, 6.0, 6.0));

        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Existing);
        ctl.on_rotate(&mut scene);
        assert_eq!(ctl.cancel(&mut scene), PlacementEvent::Cancelled { object: cow, discarded: false });

        let node = scene.get(cow).unwrap();
        assert_eq!(node.local_transform, placed);
        assert_eq!(QuarterTurns::from_rotation(node.local_transform.rotation), QuarterTurns::ZERO);

        // Picking it up again sees the unrotated footprint
        ctl.begin_placement(&mut scene, &catalog, cow, PlacementOrigin::Existing);
        assert_eq!(ctl.pending().unwrap().footprint, Footprint::new(2, 1));
    }

    #[test]
    fn test_switching_objects_restores_rotated_existing() {
        let (mut scene, catalog, mut ctl) = setup();
        let start = LocalTransform::from_position(Vec3::new(5.0, 6.0, 6.0));
        let pig = add_prop(&mut scene, "Pig", start.clone());
        let hay = add_prop(&mut scene, "Hay", LocalTransform::identity());

        ctl.begin_placement(&mut scene, &catalog, pig, PlacementOrigin::Existing);
        ctl.on_rotate(&mut scene);
        ctl.on_rotate(&mut scene);
        ctl.begin_placement(&mut scene, &catalog, hay, PlacementOrigin::Existing);

        let node = scene.get(pig).unwrap();
        assert!(node.visible);
        assert_eq!(node.local_transform, start);
        assert_eq!(ctl.pending().unwrap().object, hay);
    }
}
