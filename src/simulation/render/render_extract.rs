use crate::domain::entity::EntityId;
use crate::render::{ScreenTransform, Stage};

use super::Simulation;

/// Dynamic bodies -> pixel transforms. Bodies whose user data does not name
/// an entity are skipped.
pub(super) fn extract_transforms(sim: &Simulation) -> Vec<ScreenTransform> {
    let mut out: Vec<ScreenTransform> = sim
        .physics
        .dynamic_bodies()
        .filter_map(|(_, body)| {
            let entity = EntityId::from_user_data(body.user_data)?;
            let pos = body.translation();
            Some(ScreenTransform {
                entity,
                left: sim.scale.to_pixels(pos.x),
                top: sim.scale.to_pixels(pos.y),
                angle: body.rotation().angle(),
            })
        })
        .collect();
    out.sort_by_key(|t| t.entity);
    out
}

pub(super) fn render<S: Stage>(sim: &Simulation, stage: &mut S) -> Result<(), String> {
    for transform in extract_transforms(sim) {
        stage.place(&transform)?;
    }
    Ok(())
}
