use std::num::NonZeroUsize;

use rapier2d::pipeline::{DebugRenderBackend, DebugRenderPipeline};
use rapier2d::prelude::*;

/// Surface material shared by boundaries and boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Material {
    /// Floor and walls
    pub const BOUNDARY: Material = Material {
        density: 1.0,
        friction: 0.5,
        restitution: 0.0,
    };

    /// Spawned boxes
    pub const BOX: Material = Material {
        density: 1.0,
        friction: 0.5,
        restitution: 0.25,
    };
}

/// Everything needed to insert one dynamic box.
#[derive(Clone, Copy, Debug)]
pub struct BoxBodyDesc {
    pub center: Vector<Real>,
    pub half_extent: Real,
    pub angular_velocity: Real,
    pub material: Material,
    pub user_data: u128,
}

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub(super) bodies: RigidBodySet,
    pub(super) colliders: ColliderSet,
    pub(super) impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a world with the given gravity (+y is down).
    pub fn new(gravity: Vector<Real>) -> Self {
        Self {
            gravity,
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Fixed step size and solver effort.
    ///
    /// Velocity iterations map to solver iterations, position iterations to
    /// the internal stabilization passes.
    pub fn set_step_params(&mut self, dt: f32, velocity_iterations: u32, position_iterations: u32) {
        self.integration_parameters.dt = dt;
        if let Some(iterations) = NonZeroUsize::new(velocity_iterations as usize) {
            self.integration_parameters.num_solver_iterations = iterations;
        }
        self.integration_parameters.num_internal_stabilization_iterations =
            position_iterations as usize;
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Insert an immovable box centered at `center`.
    pub fn create_static_box(
        &mut self,
        center: Vector<Real>,
        half_extents: Vector<Real>,
        material: Material,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed().translation(center).build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Insert a collider-less fixed body at the origin. Drag joints use it
    /// as their world-space anchor.
    pub fn create_ground_anchor(&mut self) -> RigidBodyHandle {
        self.bodies.insert(RigidBodyBuilder::fixed().build())
    }

    /// Insert a square dynamic body with continuous collision detection on,
    /// so fast falls cannot tunnel through the thin boundaries.
    pub fn create_dynamic_box(&mut self, desc: &BoxBodyDesc) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(desc.center)
            .angvel(desc.angular_velocity)
            .ccd_enabled(true)
            .user_data(desc.user_data)
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(desc.half_extent, desc.half_extent)
            .density(desc.material.density)
            .friction(desc.material.friction)
            .restitution(desc.material.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Remove a body with its colliders and joints.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Advance by one fixed timestep.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Drop user forces and torques accumulated on every body.
    pub fn clear_forces(&mut self) {
        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
            body.reset_torques(false);
        }
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn contains_body(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    pub fn dynamic_bodies(&self) -> impl Iterator<Item = (RigidBodyHandle, &RigidBody)> {
        self.bodies.iter().filter(|(_, body)| body.is_dynamic())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    pub(super) fn debug_render(
        &self,
        pipeline: &mut DebugRenderPipeline,
        backend: &mut impl DebugRenderBackend,
    ) {
        pipeline.render(
            backend,
            &self.bodies,
            &self.colliders,
            &self.impulse_joints,
            &self.multibody_joints,
            &self.narrow_phase,
        );
    }
}
