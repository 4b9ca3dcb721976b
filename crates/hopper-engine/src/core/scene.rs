use crate::api::types::{EntityId, EntityKind};
use crate::components::entity::Entity;

/// Entity registry backed by a flat Vec, kept in spawn order.
/// Registry order is the update and collision order, so removal preserves it.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Handles held elsewhere stop resolving.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        Some(self.entities.remove(idx))
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn at(&self, idx: usize) -> Option<&Entity> {
        self.entities.get(idx)
    }

    pub fn at_mut(&mut self, idx: usize) -> Option<&mut Entity> {
        self.entities.get_mut(idx)
    }

    /// Two distinct entities by index, mutably. `None` if `i == j` or either
    /// index is out of range.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Entity, &mut Entity)> {
        if i == j || i.max(j) >= self.entities.len() {
            return None;
        }
        if i < j {
            let (head, tail) = self.entities.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.entities.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_by_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_pos(Vec2::new(10.0, 20.0)));
        assert_eq!(scene.get(EntityId(1)).unwrap().body.pos, Vec2::new(10.0, 20.0));
        assert!(scene.get(EntityId(2)).is_none());
    }

    #[test]
    fn despawn_keeps_order_and_invalidates_handle() {
        let mut scene = Scene::new();
        for i in 1..=3 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        assert!(scene.despawn(EntityId(2)).is_some());
        assert!(scene.get(EntityId(2)).is_none());
        let ids: Vec<_> = scene.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        scene.spawn(Entity::new(EntityId(2)));
        let (a, b) = scene.pair_mut(1, 0).unwrap();
        assert_eq!((a.id, b.id), (EntityId(2), EntityId(1)));
        assert!(scene.pair_mut(0, 0).is_none());
        assert!(scene.pair_mut(0, 5).is_none());
    }

    #[test]
    fn find_by_tag_and_kind() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("hero"));
        scene.spawn(Entity::new(EntityId(2)));
        assert_eq!(scene.find_by_tag("hero").unwrap().id, EntityId(1));
        assert_eq!(scene.find_by_kind(EntityKind::Prop).count(), 2);
        assert_eq!(scene.find_by_kind(EntityKind::Player).count(), 0);
    }
}
