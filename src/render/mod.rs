//! Stage - seam between the simulation and whatever shows the boxes
//!
//! The simulation never touches the DOM. It hands entities to a `Stage` once
//! (mount) and pushes a `ScreenTransform` per entity every frame (place).
//! `web::DomStage` is the browser implementation; `HeadlessStage` records
//! calls for tests and for the `Demo` facade.

use crate::domain::entity::{Entity, EntityId};

/// Where an entity's element goes this frame, in pixels.
///
/// `left`/`top` are the body center; elements carry negative half-size
/// margins so the center lands there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub entity: EntityId,
    pub left: f32,
    pub top: f32,
    /// Radians, clockwise on screen.
    pub angle: f32,
}

impl ScreenTransform {
    pub fn rotate_css(&self) -> String {
        format!("rotate({}rad)", self.angle)
    }
}

pub trait Stage {
    /// Create the visual for a freshly spawned entity.
    fn mount(&mut self, entity: &Entity) -> Result<(), String>;

    /// Move an already mounted visual.
    fn place(&mut self, transform: &ScreenTransform) -> Result<(), String>;
}

/// In-memory stage: remembers what was mounted and the last placement.
#[derive(Default)]
pub struct HeadlessStage {
    mounted: Vec<Entity>,
    placed: Vec<Option<ScreenTransform>>,
    place_calls: u64,
}

impl HeadlessStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> &[Entity] {
        &self.mounted
    }

    pub fn last_transform(&self, id: EntityId) -> Option<ScreenTransform> {
        self.placed.get(id.index()).copied().flatten()
    }

    pub fn place_calls(&self) -> u64 {
        self.place_calls
    }
}

impl Stage for HeadlessStage {
    fn mount(&mut self, entity: &Entity) -> Result<(), String> {
        let idx = entity.id.index();
        if self.placed.len() <= idx {
            self.placed.resize(idx + 1, None);
        }
        self.mounted.push(entity.clone());
        Ok(())
    }

    fn place(&mut self, transform: &ScreenTransform) -> Result<(), String> {
        let slot = self
            .placed
            .get_mut(transform.entity.index())
            .ok_or_else(|| format!("entity {} was never mounted", transform.entity.0))?;
        *slot = Some(*transform);
        self.place_calls += 1;
        Ok(())
    }
}
