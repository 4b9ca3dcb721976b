//! The player character: run, jump, ride platforms.
//!
//! Motion states:
//! - `Idle` after landing with no (or conflicting) horizontal input.
//! - `Running(facing)` while exactly one direction is held on the ground.
//! - `Jumping(facing)` from the jump until the next top contact.
//!
//! Horizontal velocity is decided every tick: held direction wins, otherwise
//! the player inherits its carrier's velocity, so standing still on a moving
//! platform rides it.

use glam::Vec2;

use crate::api::config::PlayerConfig;
use crate::api::types::EntityId;
use crate::components::animation::FrameAnimator;
use crate::components::entity::{Body, Entity};
use crate::components::sprite::{SheetId, SourceRect, TextureSheet};
use crate::core::collision::{CollisionData, CollisionPeer};
use crate::entities::{Behavior, TickContext};

const FRAME_WIDTH: f32 = 100.0;
const FRAME_HEIGHT: f32 = 64.0;
const IDLE_FRAMES: u32 = 4;
const RUN_FRAMES: u32 = 6;
const JUMP_FRAMES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMotion {
    Idle,
    Running(Facing),
    Jumping(Facing),
}

/// One sheet per motion. Left-facing sheets are drawn mirrored, so their
/// frames play in reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerSheets {
    pub idle: Option<SheetId>,
    pub walk_left: Option<SheetId>,
    pub walk_right: Option<SheetId>,
    pub jump_left: Option<SheetId>,
    pub jump_right: Option<SheetId>,
}

#[derive(Debug, Clone)]
pub struct Player {
    motion: PlayerMotion,
    anim: FrameAnimator,
    sheets: PlayerSheets,
    /// Set on landing, cleared on jump.
    was_grounded: bool,
    /// A single direction was held during the last update.
    was_moving: bool,
    /// Platform stood on this tick. Only meaningful while grounded.
    ground_ref: Option<EntityId>,
}

impl Player {
    pub fn spawn(id: EntityId, pos: Vec2, sheets: PlayerSheets, config: &PlayerConfig) -> Entity {
        let player = Player {
            motion: PlayerMotion::Idle,
            anim: FrameAnimator::new(IDLE_FRAMES, config.frame_delay),
            sheets,
            was_grounded: false,
            was_moving: false,
            ground_ref: None,
        };
        Entity::new(id)
            .with_tag("player")
            .with_pos(pos)
            .with_size(config.size)
            .with_physics(true, true)
            .with_sheet(TextureSheet::new(sheets.idle, IDLE_FRAMES, 1, FRAME_WIDTH, FRAME_HEIGHT))
            .with_behavior(Behavior::Player(player))
    }

    pub fn motion(&self) -> PlayerMotion {
        self.motion
    }

    pub fn frame(&self) -> u32 {
        self.anim.frame
    }

    pub fn ground_ref(&self) -> Option<EntityId> {
        self.ground_ref
    }

    pub fn clear_ground_ref(&mut self) {
        self.ground_ref = None;
    }

    /// Keep the body's box within `[0, world_width]` horizontally.
    pub fn clamp_to_screen(body: &mut Body, world_width: f32) {
        let max_x = (world_width - body.size.x).max(0.0);
        body.pos.x = body.pos.x.clamp(0.0, max_x);
    }

    /// Swap sheet and animation strip when the motion state changes.
    fn set_motion(&mut self, motion: PlayerMotion, body: &mut Body) {
        if self.motion == motion {
            return;
        }
        self.motion = motion;
        let s = &self.sheets;
        let (sheet, frames, reverse) = match motion {
            PlayerMotion::Idle => (s.idle, IDLE_FRAMES, false),
            PlayerMotion::Running(Facing::Left) => (s.walk_left, RUN_FRAMES, true),
            PlayerMotion::Running(Facing::Right) => (s.walk_right, RUN_FRAMES, false),
            PlayerMotion::Jumping(Facing::Left) => (s.jump_left, JUMP_FRAMES, true),
            PlayerMotion::Jumping(Facing::Right) => (s.jump_right, JUMP_FRAMES, false),
        };
        body.sheet = TextureSheet::new(sheet, frames, 1, FRAME_WIDTH, FRAME_HEIGHT);
        self.anim.set_strip(frames, reverse);
    }

    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext) {
        let config = &ctx.config.player;
        self.anim.tick(ctx.dt);

        let left = ctx.input.left_held();
        let right = ctx.input.right_held();
        let held = match (left, right) {
            (true, false) => Some(Facing::Left),
            (false, true) => Some(Facing::Right),
            _ => None,
        };

        let carrier_vx = if body.grounded {
            ctx.carrier_vel.map_or(0.0, |v| v.x)
        } else {
            0.0
        };

        match held {
            Some(facing) => {
                if body.grounded && self.motion != PlayerMotion::Running(facing) {
                    self.set_motion(PlayerMotion::Running(facing), body);
                }
                self.was_moving = true;
                body.vel.x = facing.sign() * config.run_speed;
            }
            None => {
                self.was_moving = false;
                body.vel.x = carrier_vx;
            }
        }

        if ctx.input.jump_held() && body.grounded {
            body.vel.y = -config.jump_impulse;
            body.grounded = false;
            self.was_grounded = false;
            let facing = if left { Facing::Left } else { Facing::Right };
            self.set_motion(PlayerMotion::Jumping(facing), body);
        }

        Player::clamp_to_screen(body, ctx.config.world.width);

        // Re-derived by this tick's collisions.
        body.grounded = false;
        self.ground_ref = None;

        if body.pos.y > config.fall_limit {
            log::info!("player {:?} fell out of the world, respawning", ctx.id);
            body.pos = config.spawn;
            body.vel.y = 0.0;
        }
    }

    pub fn on_collision(&mut self, body: &mut Body, other: &CollisionPeer, data: &CollisionData) {
        if !other.kind.is_platform() {
            return;
        }
        if data.is_top() {
            if !self.was_grounded || !self.was_moving {
                self.set_motion(PlayerMotion::Idle, body);
                self.was_grounded = true;
                self.was_moving = false;
            }
            body.grounded = true;
            body.vel.y = 0.0;
            self.ground_ref = Some(other.id);
        } else if data.is_horizontal() {
            body.vel.x = 0.0;
        } else if body.vel.y < 0.0 {
            // Head bump: stop rising.
            body.vel.y = 0.0;
        }
    }

    pub fn source_rect(&self, body: &Body) -> SourceRect {
        body.sheet.sample(self.anim.frame, 0)
    }
}
