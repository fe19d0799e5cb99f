use crate::domain::entity::{BoxColor, Entity, EntityId};
use crate::render::Stage;
use crate::systems::physics::{BoxBodyDesc, Material};

use super::Simulation;

/// Initial spin range, rad/s.
const MAX_SPIN: f32 = 5.0;

pub(super) fn spawn_entities<S: Stage>(sim: &mut Simulation, stage: &mut S) -> Result<Vec<EntityId>, String> {
    let count = sim.config.entity_count as usize;
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(spawn_entity(sim, stage)?);
    }
    log::info!("spawned {} entities", ids.len());
    Ok(ids)
}

/// Random size and color; random x inside the walls, random y in the band
/// one viewport-height above the screen.
pub(super) fn spawn_entity<S: Stage>(sim: &mut Simulation, stage: &mut S) -> Result<EntityId, String> {
    let id = sim.entities.next_id();
    let size_px = sim
        .rng
        .box_size(sim.config.min_box_size, sim.config.max_box_size);
    let color = BoxColor::new(sim.rng.channel(), sim.rng.channel());

    let half_px = size_px as f32 / 2.0;
    let x_px = sim.rng.range(half_px, sim.viewport.width - half_px);
    let y_px = -sim.rng.range(0.0, sim.viewport.height);
    let spin = sim.rng.range(-MAX_SPIN, MAX_SPIN);

    let body = sim.physics.create_dynamic_box(&BoxBodyDesc {
        center: sim.scale.vector(x_px, y_px),
        half_extent: sim.scale.to_units(half_px),
        angular_velocity: spin,
        material: Material::BOX,
        user_data: id.to_user_data(),
    });

    let entity = Entity {
        id,
        size_px,
        color,
        body,
    };
    if let Err(err) = stage.mount(&entity) {
        sim.physics.remove_body(body);
        log::error!("failed to mount entity {}: {err}", id.0);
        return Err(err);
    }

    log::debug!("spawned {id:?} ({size_px}px, {}) at ({x_px:.0}, {y_px:.0})", color.css());
    sim.entities.push(entity);
    Ok(id)
}
