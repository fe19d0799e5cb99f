use std::f32::consts::PI;

use rapier2d::prelude::*;

use super::PhysicsWorld;

/// Soft "mouse joint": a positional spring pulling a point of the body
/// towards a target, capped by a maximum force per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragJointSpec {
    pub frequency_hz: f32,
    pub damping_ratio: f32,
    pub max_force: f32,
}

impl DragJointSpec {
    pub fn with_max_force(max_force: f32) -> Self {
        Self {
            max_force,
            ..Self::default()
        }
    }

    /// Stiffness of the acceleration-based spring, ω².
    pub fn stiffness(&self) -> f32 {
        let omega = 2.0 * PI * self.frequency_hz;
        omega * omega
    }

    /// Damping of the acceleration-based spring, 2ζω.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * 2.0 * PI * self.frequency_hz
    }

    fn build(&self, target: Point<Real>, body_anchor: Point<Real>) -> GenericJoint {
        let (stiffness, damping) = (self.stiffness(), self.damping());
        GenericJointBuilder::new(JointAxesMask::empty())
            .local_anchor1(target)
            .local_anchor2(body_anchor)
            .motor_model(JointAxis::LinX, MotorModel::AccelerationBased)
            .motor_model(JointAxis::LinY, MotorModel::AccelerationBased)
            .motor_position(JointAxis::LinX, 0.0, stiffness, damping)
            .motor_position(JointAxis::LinY, 0.0, stiffness, damping)
            .motor_max_force(JointAxis::LinX, self.max_force)
            .motor_max_force(JointAxis::LinY, self.max_force)
            .build()
    }
}

impl Default for DragJointSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 5.0,
            damping_ratio: 0.7,
            max_force: 10_000.0,
        }
    }
}

impl PhysicsWorld {
    /// Attach `body` to the world-space point `target`.
    ///
    /// `ground` must be a fixed body at the origin, so its local frame is
    /// world space. The body is grabbed at the point currently under
    /// `target`. Returns `None` if either body is missing.
    pub fn create_drag_joint(
        &mut self,
        ground: RigidBodyHandle,
        body: RigidBodyHandle,
        target: Point<Real>,
        spec: &DragJointSpec,
    ) -> Option<ImpulseJointHandle> {
        if !self.bodies.contains(ground) {
            return None;
        }
        let body_anchor = self
            .bodies
            .get(body)?
            .position()
            .inverse_transform_point(&target);

        let joint = spec.build(target, body_anchor);
        Some(self.impulse_joints.insert(ground, body, joint, true))
    }

    /// Move the world-space target of a drag joint and wake its body.
    pub fn set_drag_target(&mut self, handle: ImpulseJointHandle, target: Point<Real>) -> bool {
        let Some(joint) = self.impulse_joints.get_mut(handle) else {
            return false;
        };
        joint.data.set_local_anchor1(target);
        let body = joint.body2;

        if let Some(body) = self.bodies.get_mut(body) {
            body.wake_up(true);
        }
        true
    }

    /// World-space target of a drag joint.
    pub fn drag_target(&self, handle: ImpulseJointHandle) -> Option<Point<Real>> {
        self.impulse_joints
            .get(handle)
            .map(|joint| joint.data.local_anchor1())
    }

    pub fn remove_joint(&mut self, handle: ImpulseJointHandle) -> bool {
        self.impulse_joints.remove(handle, true).is_some()
    }
}
