//! Scene manager: owns the farm scene and routes input into it.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};

use super::config::SceneConfig;
use super::graph::SceneGraph;
use super::node::{LocalTransform, NodeContent, SceneNodeId};
use crate::catalog::{Catalog, PlaceableKind};
use crate::core::camera::Camera;
use crate::core::input::{Command, InputEvent, InputState};
use crate::environment::{EnvironmentState, Season, WeatherKind};
use crate::math::{Aabb, Ray};
use crate::placement::{
    PlacementController, PlacementEvent, PlacementOrigin, PlacementSettings, RemovalOutcome,
    RemovalTrigger,
};
use crate::terrain::{GridCell, TerrainGrid};

/// What a routed input did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputOutcome {
    Placement(PlacementEvent),
    Removal(RemovalOutcome),
    None,
}

/// Owns the scene graph, terrain, placement and environment state.
pub struct SceneManager {
    config: SceneConfig,
    catalog: Catalog,
    scene_graph: SceneGraph,
    terrain: TerrainGrid,
    camera: Camera,
    input: InputState,
    placement: PlacementController,
    removal: RemovalTrigger,
    environment: EnvironmentState,
    sky_node: SceneNodeId,
    grid_node: SceneNodeId,
    block_count: usize,
}

impl SceneManager {
    /// Build the scene: sky, seeded terrain, grid overlay and placement cursor.
    pub fn new(config: SceneConfig, catalog: Catalog) -> Self {
        let mut scene_graph = SceneGraph::new();
        let sky_node = scene_graph.add_object(
            "sky",
            NodeContent::Sky { radius: config.environment.sky_radius },
            LocalTransform::identity(),
            None,
        );

        let mut terrain = TerrainGrid::new(config.terrain_height);
        let cells = terrain.seed(config.initial_levels);

        let placement = PlacementController::new(&mut scene_graph, PlacementSettings::from_config(&config));

        let (width, height) = config.camera.viewport;
        let mut camera = Camera::look_at(config.camera.position, config.camera.target, Vec3::Y, config.camera.ortho_size);
        camera.set_aspect(width, height);

        let mut manager = Self {
            environment: EnvironmentState::from_config(&config.environment),
            input: InputState::new(width, height),
            catalog,
            scene_graph,
            terrain,
            camera,
            placement,
            removal: RemovalTrigger::new(),
            sky_node,
            grid_node: sky_node,
            block_count: 0,
            config,
        };
        manager.add_blocks(&cells);
        manager.grid_node = manager.add_grid_overlay();

        log::info!(
            "Scene ready: {} cells, {} blocks, {} kinds in catalog",
            manager.terrain.len(),
            manager.block_count,
            manager.catalog.len()
        );
        manager
    }

    fn add_blocks(&mut self, cells: &[GridCell]) {
        let layout = self.config.blocks;
        for cell in cells {
            for block in layout.blocks_for_cell(cell) {
                self.scene_graph.add_object(
                    format!("{}_{}_{}", block.kind.name(), cell.coord.i, cell.coord.j),
                    NodeContent::TerrainBlock { kind: block.kind, cell: block.cell },
                    LocalTransform::from_position(block.center),
                    Some(block.local_bounds()),
                );
                self.block_count += 1;
            }
        }
    }

    fn add_grid_overlay(&mut self) -> SceneNodeId {
        let overlay = self.config.blocks.overlay(self.terrain.extent(), self.config.grid_unit);
        self.scene_graph.add_object(
            "grid",
            NodeContent::GridOverlay { size: overlay.size, divisions: overlay.divisions },
            LocalTransform::from_position(overlay.center),
            None,
        )
    }

    /// Grow the terrain by one level. Returns the number of new cells.
    pub fn expand_terrain(&mut self) -> usize {
        let cells = self.terrain.expand();
        self.add_blocks(&cells);
        self.scene_graph.remove(self.grid_node);
        self.grid_node = self.add_grid_overlay();
        cells.len()
    }

    /// Add a hidden instance of `kind` and start placing it.
    pub fn spawn(&mut self, kind: &str) -> Option<SceneNodeId> {
        let Some(def) = self.catalog.get(kind) else {
            log::warn!("Cannot spawn unknown kind '{}'", kind);
            return None;
        };
        let (transform, bounds) = spawn_pose(def, self.config.grid_unit);
        let id = self
            .scene_graph
            .add_object(def.name.clone(), NodeContent::Prop { kind: def.name.clone() }, transform, Some(bounds));
        self.scene_graph.set_visible(id, false);

        let event = self
            .placement
            .begin_placement(&mut self.scene_graph, &self.catalog, id, PlacementOrigin::Spawned);
        if event == PlacementEvent::Ignored {
            self.scene_graph.remove(id);
            return None;
        }
        Some(id)
    }

    /// Pick up an object already in the scene.
    pub fn begin_placement(&mut self, object: SceneNodeId) -> PlacementEvent {
        self.placement
            .begin_placement(&mut self.scene_graph, &self.catalog, object, PlacementOrigin::Existing)
    }

    /// Grass surface point under the ray, if any.
    pub fn ground_point(&mut self, ray: &Ray) -> Option<Vec3> {
        let hit = self.scene_graph.raycast_filtered(ray, |n| n.content.is_ground())?;
        let top = self.scene_graph.world_bounds(hit.leaf)?.max.y;
        Some(Vec3::new(hit.point.x, top, hit.point.z))
    }

    pub fn pointer_move(&mut self, ray: &Ray) -> PlacementEvent {
        match self.ground_point(ray) {
            Some(point) => self.placement.on_pointer_move(&mut self.scene_graph, point),
            None => PlacementEvent::Ignored,
        }
    }

    pub fn rotate(&mut self) -> PlacementEvent {
        self.placement.on_rotate(&mut self.scene_graph)
    }

    /// Click dispatch: removal when armed, drop when placing, pick up otherwise.
    pub fn pointer_down(&mut self, ray: &Ray) -> InputOutcome {
        if self.removal.is_armed() {
            let hit = self.scene_graph.raycast(ray);
            let outcome = self.removal.try_remove(&mut self.scene_graph, &self.catalog, hit.as_ref());
            return InputOutcome::Removal(outcome);
        }

        if self.placement.is_placing() {
            let ground = self.ground_point(ray);
            return InputOutcome::Placement(self.placement.on_pointer_down(&mut self.scene_graph, ground));
        }

        let Some(hit) = self.scene_graph.raycast(ray) else {
            return InputOutcome::None;
        };
        let is_prop = self
            .scene_graph
            .get(hit.root_object)
            .is_some_and(|n| n.content.prop_kind().is_some());
        if !is_prop {
            log::debug!("Click on {:?} selects nothing", hit.root_object);
            return InputOutcome::None;
        }
        InputOutcome::Placement(self.begin_placement(hit.root_object))
    }

    pub fn cancel(&mut self) -> PlacementEvent {
        self.placement.cancel(&mut self.scene_graph)
    }

    /// Arm the delete tool for the next click
    pub fn arm_removal(&mut self) {
        self.removal.arm();
    }

    pub fn disarm_removal(&mut self) {
        self.removal.disarm();
    }

    /// Route a raw input event through the camera into the scene.
    pub fn handle(&mut self, event: &InputEvent) -> InputOutcome {
        if let InputEvent::Resize { width, height } = *event {
            self.camera.set_aspect(width, height);
        }
        match self.input.process_event(event) {
            Command::Hover(ndc) => {
                let ray = self.camera.ray_from_ndc(ndc);
                InputOutcome::Placement(self.pointer_move(&ray))
            }
            Command::Click(ndc) => {
                let ray = self.camera.ray_from_ndc(ndc);
                self.pointer_down(&ray)
            }
            Command::Rotate => InputOutcome::Placement(self.rotate()),
            Command::None => InputOutcome::None,
        }
    }

    pub fn set_weather(&mut self, weather: WeatherKind) {
        self.environment.set_weather(weather);
    }

    pub fn set_season(&mut self, season: Season) {
        self.environment.set_season(season);
    }

    pub fn set_night(&mut self, night: bool) {
        self.environment.set_night(night);
    }

    /// Advance the environment clock
    pub fn update(&mut self, dt_seconds: f32) {
        self.environment.update(dt_seconds);
    }

    pub fn scene_graph(&self) -> &SceneGraph {
        &self.scene_graph
    }

    pub fn scene_graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene_graph
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    pub fn removal_armed(&self) -> bool {
        self.removal.is_armed()
    }

    pub fn environment(&self) -> &EnvironmentState {
        &self.environment
    }

    pub fn sky_node(&self) -> SceneNodeId {
        self.sky_node
    }

    pub fn grid_node(&self) -> SceneNodeId {
        self.grid_node
    }

    /// Number of terrain block nodes in the scene
    pub fn block_count(&self) -> usize {
        self.block_count
    }
}

/// Initial transform and local pick box for a fresh instance of `kind`.
///
/// The pick box covers the footprint and `bounds_height` in world units, so it
/// is pre-divided by the model scale and tilt.
fn spawn_pose(kind: &PlaceableKind, grid_unit: f32) -> (LocalTransform, Aabb) {
    let tilt = if kind.lay_flat { Quat::from_rotation_x(-FRAC_PI_2) } else { Quat::IDENTITY };
    let yaw = Quat::from_rotation_y(kind.spawn_yaw_degrees.to_radians());
    let scale = if kind.scale > 0.0 { kind.scale } else { 1.0 };

    let half = kind.footprint().world_extent(grid_unit) / 2.0;
    let world_box = Aabb::new(
        Vec3::new(-half.x, 0.0, -half.y),
        Vec3::new(half.x, kind.bounds_height, half.y),
    );
    let to_local = Mat4::from_scale(Vec3::splat(1.0 / scale)) * Mat4::from_quat(tilt.inverse());

    let transform = LocalTransform {
        position: Vec3::new(0.0, kind.rest_height, 0.0),
        rotation: yaw * tilt,
        scale,
    };
    (transform, world_box.transformed(&to_local))
}
