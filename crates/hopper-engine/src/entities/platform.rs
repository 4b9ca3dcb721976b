//! Ground and conveyor platforms.

use glam::Vec2;

use crate::api::config::PlatformConfig;
use crate::api::types::EntityId;
use crate::components::entity::{Body, Entity};
use crate::components::sprite::{SheetId, TextureSheet};
use crate::core::math::advance;
use crate::core::rng::Rng;
use crate::entities::{Behavior, TickContext};

/// Session-wide platform bookkeeping, owned by the world and passed in
/// explicitly.
///
/// `elapsed` and `count` are accumulated but nothing reads them to gate
/// behavior yet. Every platform update adds its `dt`, so `elapsed` grows by
/// `dt` times the number of live platforms per tick.
#[derive(Debug, Clone, Default)]
pub struct PlatformContext {
    elapsed: f32,
    count: u32,
}

impl PlatformContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per constructed platform. The first registration resets
    /// the accumulator.
    pub fn register(&mut self) {
        if self.count == 0 {
            self.elapsed = 0.0;
        }
        self.count += 1;
    }

    pub fn accumulate(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Clone)]
pub struct Platform {
    ground: bool,
    /// Randomized per instance and on every respawn; unused so far.
    spawn_delay: f32,
}

impl Platform {
    /// Build a platform entity. Ground platforms never move; the rest scroll
    /// left at `initial_speed`.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        id: EntityId,
        pos: Vec2,
        size: Vec2,
        ground: bool,
        sheet: Option<SheetId>,
        config: &PlatformConfig,
        platforms: &mut PlatformContext,
        rng: &mut Rng,
    ) -> Entity {
        let spawn_delay = rng.range_f32(config.spawn_delay.min, config.spawn_delay.max);
        platforms.register();
        let vx = if ground { 0.0 } else { -config.initial_speed };

        Entity::new(id)
            .with_tag(if ground { "ground" } else { "platform" })
            .with_pos(pos)
            .with_size(size.max(Vec2::ZERO))
            .with_velocity(Vec2::new(vx, 0.0))
            .with_static(true)
            .with_physics(false, false)
            .with_sheet(TextureSheet::new(sheet, 1, 1, 0.0, 0.0))
            .with_behavior(Behavior::Platform(Platform { ground, spawn_delay }))
    }

    pub fn is_ground(&self) -> bool {
        self.ground
    }

    pub fn spawn_delay(&self) -> f32 {
        self.spawn_delay
    }

    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext) {
        ctx.platforms.accumulate(ctx.dt);
        if self.ground {
            return;
        }

        body.pos = advance(body.pos, body.vel, ctx.dt);
        if body.pos.x + body.size.x < 0.0 {
            self.respawn(body, &ctx.config.platform, ctx.rng);
            log::debug!(
                "platform {:?} wrapped to ({}, {}) width {} speed {}",
                ctx.id, body.pos.x, body.pos.y, body.size.x, body.vel.x
            );
        }
    }

    /// Move to the right edge with a fresh height, width and speed.
    fn respawn(&mut self, body: &mut Body, config: &PlatformConfig, rng: &mut Rng) {
        body.pos.y = rng.range_int(config.respawn_y.min, config.respawn_y.max);
        body.size.x = rng.range_int(config.respawn_width.min, config.respawn_width.max).max(1.0);
        body.vel.x = -rng.range_int(config.respawn_speed.min, config.respawn_speed.max);
        body.pos.x = config.respawn_x;
        self.spawn_delay = rng.range_f32(config.spawn_delay.min, config.spawn_delay.max);
    }
}
