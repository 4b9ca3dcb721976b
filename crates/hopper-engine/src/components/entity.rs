use glam::Vec2;
use crate::api::types::{EntityId, EntityKind};
use crate::components::sprite::{SourceRect, TextureSheet};
use crate::core::collision::{CollisionData, CollisionPeer};
use crate::core::math::Aabb;
use crate::entities::{Behavior, TickContext};

/// State shared by every entity: placement, motion, physics flags and sheet.
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner in world space.
    pub pos: Vec2,
    pub vel: Vec2,
    /// Width and height of the collision box.
    pub size: Vec2,
    /// Never moved by the integrator or pushed by the resolver.
    pub is_static: bool,
    /// Integrated by the physics pass.
    pub has_physics: bool,
    pub affected_by_gravity: bool,
    /// Resting on a surface this tick. Re-derived from collisions every frame.
    pub grounded: bool,
    pub visible: bool,
    pub sheet: TextureSheet,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::ZERO,
            is_static: false,
            has_physics: false,
            affected_by_gravity: true,
            grounded: false,
            visible: true,
            sheet: TextureSheet::default(),
        }
    }
}

impl Body {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Visible with a non-zero box. Only collidable bodies take part in
    /// collision resolution.
    pub fn is_collidable(&self) -> bool {
        self.visible && self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Fat Entity: common body plus one behavior variant.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    pub body: Body,
    pub behavior: Behavior,
}

impl Entity {
    /// Create a behaviorless entity at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            body: Body::default(),
            behavior: Behavior::None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.body.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.body.size = size;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.body.vel = vel;
        self
    }

    pub fn with_sheet(mut self, sheet: TextureSheet) -> Self {
        self.body.sheet = sheet;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.body.is_static = is_static;
        self
    }

    pub fn with_physics(mut self, has_physics: bool, affected_by_gravity: bool) -> Self {
        self.body.has_physics = has_physics;
        self.body.affected_by_gravity = affected_by_gravity;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.behavior.kind()
    }

    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }

    /// Handle of the entity this one is riding, if any.
    pub fn carrier(&self) -> Option<EntityId> {
        self.behavior.carrier()
    }

    pub fn clear_carrier(&mut self) {
        self.behavior.clear_carrier();
    }

    /// Per-tick behavior step (input, timers, self-driven motion).
    pub fn update(&mut self, ctx: &mut TickContext) {
        self.behavior.update(&mut self.body, ctx);
    }

    /// React to an overlap reported by the resolver.
    pub fn on_collision(&mut self, other: &CollisionPeer, data: &CollisionData) {
        self.behavior.on_collision(&mut self.body, other, data);
    }

    /// Sheet rectangle for the current frame. `None` means "draw the whole
    /// sheet" for visible entities, or "draw nothing" for hidden ones.
    pub fn source_rect(&self) -> Option<SourceRect> {
        if !self.body.visible {
            return None;
        }
        self.behavior.source_rect(&self.body)
    }

    /// Snapshot handed to the other side of a collision.
    pub fn peer(&self) -> CollisionPeer {
        CollisionPeer {
            id: self.id,
            kind: self.kind(),
            pos: self.body.pos,
            vel: self.body.vel,
            size: self.body.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_body_fields() {
        let e = Entity::new(EntityId(4))
            .with_tag("crate")
            .with_pos(Vec2::new(5.0, 6.0))
            .with_size(Vec2::new(10.0, 20.0))
            .with_static(true);
        assert_eq!(e.kind(), EntityKind::Prop);
        assert_eq!(e.aabb().max, Vec2::new(15.0, 26.0));
        assert!(e.body.is_static);
        assert!(e.body.is_collidable());
    }

    #[test]
    fn hidden_or_flat_bodies_are_not_collidable() {
        let mut e = Entity::new(EntityId(1)).with_size(Vec2::new(10.0, 10.0));
        e.body.visible = false;
        assert!(!e.body.is_collidable());
        e.body.visible = true;
        e.body.size.y = 0.0;
        assert!(!e.body.is_collidable());
    }

    #[test]
    fn hidden_entities_have_no_source_rect() {
        let mut e = Entity::new(EntityId(1));
        e.body.visible = false;
        assert_eq!(e.source_rect(), None);
    }
}
