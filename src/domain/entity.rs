//! Entities: one dynamic body paired with one visual element.
//!
//! Neither side owns the other. The body carries the entity id in its
//! `user_data`, the stage keeps its elements keyed by the same id.

use rapier2d::prelude::RigidBodyHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// `user_data` of 0 means "no entity" (boundaries, ground anchor).
    pub fn to_user_data(self) -> u128 {
        self.0 as u128 + 1
    }

    pub fn from_user_data(data: u128) -> Option<Self> {
        let id = data.checked_sub(1)?;
        u32::try_from(id).ok().map(EntityId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Box color; blue is always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxColor {
    pub r: u8,
    pub g: u8,
}

impl BoxColor {
    pub fn new(r: u8, g: u8) -> Self {
        Self { r, g }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, 0)", self.r, self.g)
    }
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    /// Edge length in pixels
    pub size_px: u32,
    pub color: BoxColor,
    pub body: RigidBodyHandle,
}

/// Dense table: `EntityId(n)` lives at index `n`.
#[derive(Default)]
pub struct EntityTable {
    entities: Vec<Entity>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> EntityId {
        EntityId(self.entities.len() as u32)
    }

    pub(crate) fn push(&mut self, entity: Entity) {
        debug_assert_eq!(entity.id, self.next_id());
        self.entities.push(entity);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}
