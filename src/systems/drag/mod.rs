//! DragController - pointer/touch drag state machine
//!
//! Each gesture is Idle until a pointer goes down on an entity, Dragging
//! while the pointer moves, and Idle again once it is released. Joints are
//! keyed by `InputMode::key`, so pointer mode and multi-touch mode share one
//! code path:
//! - pointer mode: every pointer maps to the single mouse slot
//! - multi-touch: one slot per touch identifier

use rapier2d::prelude::*;

use crate::domain::entity::EntityId;
use crate::domain::input::{InputMode, PointerId};
use crate::systems::physics::{DragJointSpec, PhysicsWorld};

/// One live drag joint.
#[derive(Clone, Copy, Debug)]
pub struct DragJoint {
    pub pointer: PointerId,
    pub entity: EntityId,
    pub handle: ImpulseJointHandle,
}

pub struct DragController {
    mode: InputMode,
    spec: DragJointSpec,
    joints: Vec<DragJoint>,
}

impl DragController {
    pub fn new(mode: InputMode, spec: DragJointSpec) -> Self {
        Self {
            mode,
            spec,
            joints: Vec::new(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn spec(&self) -> &DragJointSpec {
        &self.spec
    }

    pub fn joints(&self) -> &[DragJoint] {
        &self.joints
    }

    pub fn active_count(&self) -> usize {
        self.joints.len()
    }

    pub fn is_dragging(&self, pointer: PointerId) -> bool {
        let key = self.mode.key(pointer);
        self.joints.iter().any(|j| j.pointer == key)
    }

    /// Idle -> Dragging.
    ///
    /// Whatever joint already occupies the pointer's slot is destroyed first.
    /// Returns false (and leaves the slot empty) when the joint cannot be
    /// created because a body is missing.
    pub fn begin(
        &mut self,
        physics: &mut PhysicsWorld,
        ground: RigidBodyHandle,
        pointer: PointerId,
        entity: EntityId,
        body: RigidBodyHandle,
        target: Point<Real>,
    ) -> bool {
        let key = self.mode.key(pointer);
        self.end(physics, key);

        let Some(handle) = physics.create_drag_joint(ground, body, target, &self.spec) else {
            log::warn!("drag on {entity:?} ignored: body is gone");
            return false;
        };

        log::debug!("drag start {key:?} on {entity:?}");
        self.joints.push(DragJoint {
            pointer: key,
            entity,
            handle,
        });
        true
    }

    /// Dragging -> Dragging. Returns how many joints were retargeted.
    pub fn move_to(
        &mut self,
        physics: &mut PhysicsWorld,
        pointer: PointerId,
        target: Point<Real>,
    ) -> usize {
        let key = self.mode.key(pointer);
        let mut moved = 0;
        for joint in self.joints.iter().filter(|j| j.pointer == key) {
            if physics.set_drag_target(joint.handle, target) {
                moved += 1;
            }
        }
        moved
    }

    /// Dragging -> Idle. Destroys the joints in the pointer's slot and
    /// returns how many were removed; 0 when the slot was already empty.
    pub fn end(&mut self, physics: &mut PhysicsWorld, pointer: PointerId) -> usize {
        let key = self.mode.key(pointer);
        let before = self.joints.len();
        self.joints.retain(|joint| {
            if joint.pointer != key {
                return true;
            }
            physics.remove_joint(joint.handle);
            log::debug!("drag end {key:?} on {:?}", joint.entity);
            false
        });
        before - self.joints.len()
    }

    /// Destroy every live joint.
    pub fn release_all(&mut self, physics: &mut PhysicsWorld) -> usize {
        let count = self.joints.len();
        for joint in self.joints.drain(..) {
            physics.remove_joint(joint.handle);
        }
        count
    }
}
