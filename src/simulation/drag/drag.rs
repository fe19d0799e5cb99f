use crate::domain::entity::EntityId;
use crate::domain::input::PointerId;

use super::Simulation;

pub(super) fn pointer_down(sim: &mut Simulation, pointer: PointerId, entity: EntityId, x_px: f32, y_px: f32) -> bool {
    let Some(body) = sim.entities.get(entity).map(|e| e.body) else {
        log::debug!("pointer down on unknown entity {}", entity.0);
        return false;
    };
    let target = sim.scale.point(x_px, y_px);
    sim.drag
        .begin(&mut sim.physics, sim.ground, pointer, entity, body, target)
}

pub(super) fn pointer_move(sim: &mut Simulation, pointer: PointerId, x_px: f32, y_px: f32) -> usize {
    let target = sim.scale.point(x_px, y_px);
    sim.drag.move_to(&mut sim.physics, pointer, target)
}

pub(super) fn pointer_up(sim: &mut Simulation, pointer: PointerId) -> usize {
    sim.drag.end(&mut sim.physics, pointer)
}

pub(super) fn release_all(sim: &mut Simulation) -> usize {
    let released = sim.drag.release_all(&mut sim.physics);
    if released > 0 {
        log::debug!("released {released} drag joints");
    }
    released
}
