use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Every body in the system, sun first, in spawn order.
///
/// The orbit animator resolves ids here once per body per frame; with a
/// dozen bodies a linear scan beats any index.
pub struct Scene {
    bodies: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    pub fn spawn(&mut self, body: Entity) {
        if self.get(body.id).is_some() {
            log::warn!("scene: duplicate body id {:?}, lookups will see the first", body.id);
        }
        self.bodies.push(body);
    }

    /// Remove a body. Draw order of the remaining bodies may change.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Bodies in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.bodies.iter()
    }

    /// Look a body up by name ("earth", "moon", ...).
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.bodies.iter().find(|b| b.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
