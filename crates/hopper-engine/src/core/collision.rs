//! AABB overlap detection and resolution.
//!
//! Every unordered pair of collidable entities is tested once per tick. When
//! exactly one side is static, the other side is pushed flush against it along
//! the shallower axis. Two dynamic bodies only report contact; neither is moved.
//! Both sides receive `on_collision` with a normal pointing toward themselves.

use glam::Vec2;
use crate::api::types::{EntityId, EntityKind};
use crate::components::entity::Entity;
use crate::core::math::Aabb;
use crate::core::scene::Scene;

/// How far above a surface a body's previous bottom may sit and still count
/// as landing on it.
pub const LANDING_SLOP: f32 = 0.5;

/// Contact information handed to `on_collision`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionData {
    /// Axis-aligned unit normal pointing from the other body toward the
    /// receiver. `(0, -1)` means the receiver is on top.
    pub normal: Vec2,
}

impl CollisionData {
    /// Receiver landed on top of the other body.
    pub const TOP: CollisionData = CollisionData { normal: Vec2::new(0.0, -1.0) };
    /// Receiver hit the other body from below.
    pub const BOTTOM: CollisionData = CollisionData { normal: Vec2::new(0.0, 1.0) };
    /// Receiver struck the other body's left face.
    pub const LEFT: CollisionData = CollisionData { normal: Vec2::new(-1.0, 0.0) };
    /// Receiver struck the other body's right face.
    pub const RIGHT: CollisionData = CollisionData { normal: Vec2::new(1.0, 0.0) };

    pub fn is_top(&self) -> bool {
        self.normal.x == 0.0 && self.normal.y == -1.0
    }

    pub fn is_horizontal(&self) -> bool {
        self.normal.x != 0.0
    }

    pub fn flipped(&self) -> CollisionData {
        CollisionData { normal: -self.normal }
    }
}

/// What the receiver of a collision may know about the other side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPeer {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

/// One resolved pair, recorded for inspection after the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
    /// Normal as seen by `a`.
    pub normal: Vec2,
}

/// Pick the contact normal for `mover` against `other` given their overlap
/// `depth`. Landing from above wins over the shallow-axis rule, and ties go
/// to the vertical axis.
pub fn contact_normal(mover: &Aabb, mover_vel: Vec2, other: &Aabb, depth: Vec2, dt: f32) -> CollisionData {
    let prev_bottom = mover.max.y - mover_vel.y * dt;
    let landed = mover_vel.y >= 0.0 && prev_bottom <= other.min.y + LANDING_SLOP;

    if landed || depth.y <= depth.x {
        if landed || mover.center().y < other.center().y {
            CollisionData::TOP
        } else {
            CollisionData::BOTTOM
        }
    } else if mover.center().x < other.center().x {
        CollisionData::LEFT
    } else {
        CollisionData::RIGHT
    }
}

/// Move `mover` flush against `other` on the side named by `data`.
fn push_out(mover: &mut Entity, other: &Aabb, data: &CollisionData) {
    let body = &mut mover.body;
    if data.normal.y < 0.0 {
        body.pos.y = other.min.y - body.size.y;
    } else if data.normal.y > 0.0 {
        body.pos.y = other.max.y;
    } else if data.normal.x < 0.0 {
        body.pos.x = other.min.x - body.size.x;
    } else {
        body.pos.x = other.max.x;
    }
}

/// Test one pair and dispatch callbacks. Returns the contact if they touched.
fn resolve_pair(a: &mut Entity, b: &mut Entity, dt: f32) -> Option<Contact> {
    if a.body.is_static && b.body.is_static {
        return None;
    }
    if !a.body.is_collidable() || !b.body.is_collidable() {
        return None;
    }
    let (box_a, box_b) = (a.aabb(), b.aabb());
    let depth = box_a.overlap(&box_b)?;

    // Normal as seen by `a`; the static side never moves.
    let data_a = match (a.body.is_static, b.body.is_static) {
        (false, true) => {
            let data = contact_normal(&box_a, a.body.vel, &box_b, depth, dt);
            push_out(a, &box_b, &data);
            data
        }
        (true, false) => {
            let data = contact_normal(&box_b, b.body.vel, &box_a, depth, dt);
            push_out(b, &box_a, &data);
            data.flipped()
        }
        _ => contact_normal(&box_a, a.body.vel, &box_b, depth, dt),
    };
    let data_b = data_a.flipped();

    // Callbacks see the post-resolution state of the other side.
    let (peer_a, peer_b) = (a.peer(), b.peer());
    a.on_collision(&peer_b, &data_a);
    b.on_collision(&peer_a, &data_b);

    Some(Contact {
        a: a.id,
        b: b.id,
        normal: data_a.normal,
    })
}

/// Resolve every overlapping pair once, in registry order.
/// `contacts` is cleared and refilled.
pub fn resolve(scene: &mut Scene, dt: f32, contacts: &mut Vec<Contact>) {
    contacts.clear();
    let n = scene.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let Some((a, b)) = scene.pair_mut(i, j) else {
                continue;
            };
            if let Some(contact) = resolve_pair(a, b, dt) {
                contacts.push(contact);
            }
        }
    }
}
