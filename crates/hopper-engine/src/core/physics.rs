//! Gravity and velocity integration for dynamic bodies.
//!
//! Semi-implicit Euler: gravity updates velocity first, then the new velocity
//! moves the body.

use crate::components::entity::Body;
use crate::core::math::advance;
use crate::core::scene::Scene;

/// Advance one body by `dt`. Static bodies and bodies without physics are
/// left untouched; they move themselves if they move at all.
pub fn integrate_body(body: &mut Body, gravity: f32, dt: f32) {
    if !body.has_physics || body.is_static {
        return;
    }
    if body.affected_by_gravity {
        body.vel.y += gravity * dt;
    }
    body.pos = advance(body.pos, body.vel, dt);
}

/// Integrate every entity in the scene.
pub fn integrate(scene: &mut Scene, gravity: f32, dt: f32) {
    for entity in scene.iter_mut() {
        integrate_body(&mut entity.body, gravity, dt);
    }
}
