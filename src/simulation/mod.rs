//! Simulation - owned context for one running demo
//!
//! Replaces page-level globals: the physics world, the boundaries, the
//! entity table and the drag controller all live here. The host (browser or
//! test) creates one `Simulation`, spawns entities into a `Stage`, then
//! calls `tick` once per frame and forwards pointer events.
//!
//! Work is split by phase:
//! - init/    - bootstrap (world + boundaries) and runtime toggles
//! - spawn/   - entity creation
//! - drag/    - pointer events -> drag controller
//! - step/    - fixed-step advance
//! - render/  - body -> screen transform extraction

use rapier2d::pipeline::DebugRenderBackend;
use rapier2d::prelude::RigidBodyHandle;

use crate::core::random::DemoRng;
use crate::core::units::{PixelScale, Viewport};
use crate::domain::config::DemoConfig;
use crate::domain::entity::{EntityId, EntityTable};
use crate::domain::input::{InputMode, PointerId};
use crate::render::{ScreenTransform, Stage};
use crate::systems::drag::DragController;
use crate::systems::physics::{DebugLayer, PhysicsWorld};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/bootstrap.rs"]
mod bootstrap;
#[path = "init/settings.rs"]
mod settings;
#[path = "spawn/spawner.rs"]
mod spawner;
#[path = "drag/drag.rs"]
mod drag;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Demo;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Half thickness of the floor and walls, in pixels.
pub const BOUNDARY_HALF_THICKNESS_PX: f32 = 10.0;

/// The three static bodies framing the viewport.
#[derive(Clone, Copy, Debug)]
pub struct Boundaries {
    pub floor: RigidBodyHandle,
    pub left_wall: RigidBodyHandle,
    pub right_wall: RigidBodyHandle,
}

impl Boundaries {
    pub fn handles(&self) -> [RigidBodyHandle; 3] {
        [self.floor, self.left_wall, self.right_wall]
    }
}

pub struct Simulation {
    config: DemoConfig,
    scale: PixelScale,
    viewport: Viewport,

    physics: PhysicsWorld,
    boundaries: Boundaries,
    // Fixed body at the origin; body 1 of every drag joint.
    ground: RigidBodyHandle,

    entities: EntityTable,
    drag: DragController,
    rng: DemoRng,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Build the world and boundaries for `viewport`. No entities yet.
    ///
    /// Fails when `config` does not pass `DemoConfig::validate`.
    pub fn new(config: DemoConfig, viewport: Viewport, mode: InputMode) -> Result<Self, String> {
        config.validate()?;
        Ok(bootstrap::create_simulation(config, viewport, mode))
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn scale(&self) -> PixelScale {
        self.scale
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn input_mode(&self) -> InputMode {
        self.drag.mode()
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn entities(&self) -> &EntityTable {
        &self.entities
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn active_joint_count(&self) -> usize {
        self.drag.active_count()
    }

    // === SPAWN ===

    /// Spawn `config.entity_count` boxes, mounting each on `stage`.
    pub fn spawn_entities<S: Stage>(&mut self, stage: &mut S) -> Result<Vec<EntityId>, String> {
        spawner::spawn_entities(self, stage)
    }

    /// Spawn one box.
    pub fn spawn_entity<S: Stage>(&mut self, stage: &mut S) -> Result<EntityId, String> {
        spawner::spawn_entity(self, stage)
    }

    // === INPUT ===

    /// Start dragging `entity` from the pixel position (`x_px`, `y_px`).
    pub fn pointer_down(&mut self, pointer: PointerId, entity: EntityId, x_px: f32, y_px: f32) -> bool {
        drag::pointer_down(self, pointer, entity, x_px, y_px)
    }

    pub fn pointer_move(&mut self, pointer: PointerId, x_px: f32, y_px: f32) -> usize {
        drag::pointer_move(self, pointer, x_px, y_px)
    }

    pub fn pointer_up(&mut self, pointer: PointerId) -> usize {
        drag::pointer_up(self, pointer)
    }

    pub fn release_all_pointers(&mut self) -> usize {
        drag::release_all(self)
    }

    // === FRAME ===

    /// Advance one fixed timestep and clear accumulated forces.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Screen transforms of every entity body, ordered by entity id.
    pub fn transforms(&self) -> Vec<ScreenTransform> {
        render_extract::extract_transforms(self)
    }

    pub fn render<S: Stage>(&self, stage: &mut S) -> Result<(), String> {
        render_extract::render(self, stage)
    }

    /// One animation frame: step, then push transforms to `stage`.
    pub fn tick<S: Stage>(&mut self, stage: &mut S) -> Result<(), String> {
        self.step();
        self.render(stage)
    }

    /// Feed the engine's debug visualization to `backend`.
    pub fn debug_draw(&self, layer: &mut DebugLayer, backend: &mut impl DebugRenderBackend) {
        layer.draw(&self.physics, backend);
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
