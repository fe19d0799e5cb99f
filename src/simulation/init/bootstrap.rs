use rapier2d::prelude::*;

use crate::core::random::DemoRng;
use crate::core::units::{PixelScale, Viewport};
use crate::domain::config::DemoConfig;
use crate::domain::entity::EntityTable;
use crate::domain::input::InputMode;
use crate::systems::drag::DragController;
use crate::systems::physics::{DragJointSpec, Material, PhysicsWorld};

use super::perf_stats::PerfStats;
use super::{Boundaries, Simulation, BOUNDARY_HALF_THICKNESS_PX};

pub(super) fn create_simulation(config: DemoConfig, viewport: Viewport, mode: InputMode) -> Simulation {
    if viewport.is_degenerate() {
        log::warn!(
            "degenerate viewport {}x{}; boundaries will not enclose anything",
            viewport.width,
            viewport.height
        );
    }

    let scale = config.pixel_scale();
    let mut physics = PhysicsWorld::new(vector![0.0, config.gravity]);
    physics.set_step_params(
        config.timestep,
        config.velocity_iterations,
        config.position_iterations,
    );

    let boundaries = create_boundaries(&mut physics, scale, viewport);
    let ground = physics.create_ground_anchor();
    let drag = DragController::new(mode, DragJointSpec::with_max_force(config.max_drag_force));
    let rng = DemoRng::from_seed_or_host(config.seed);

    log::info!(
        "world ready: {}x{} px at {} px/unit, gravity {}, {:?} input",
        viewport.width,
        viewport.height,
        scale.pixels_per_unit(),
        config.gravity,
        mode
    );

    Simulation {
        config,
        scale,
        viewport,
        physics,
        boundaries,
        ground,
        entities: EntityTable::new(),
        drag,
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Floor below the viewport, one wall past each side edge.
///
/// Walls are 2h tall, centered on the top edge, so they also cover the
/// spawn band above the screen.
fn create_boundaries(physics: &mut PhysicsWorld, scale: PixelScale, viewport: Viewport) -> Boundaries {
    let t = BOUNDARY_HALF_THICKNESS_PX;
    let (w, h) = (viewport.width, viewport.height);

    let floor = physics.create_static_box(
        scale.vector(w / 2.0, h + t),
        scale.vector(w / 2.0, t),
        Material::BOUNDARY,
    );
    let left_wall = physics.create_static_box(
        scale.vector(-t, 0.0),
        scale.vector(t, h),
        Material::BOUNDARY,
    );
    let right_wall = physics.create_static_box(
        scale.vector(w + t, 0.0),
        scale.vector(t, h),
        Material::BOUNDARY,
    );

    Boundaries {
        floor,
        left_wall,
        right_wall,
    }
}
