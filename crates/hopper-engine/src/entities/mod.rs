//! Per-kind behaviors. Each variant owns only its extra state; the shared
//! body is passed in by [`Entity`](crate::components::entity::Entity).

pub mod collectible;
pub mod platform;
pub mod player;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{EntityId, EntityKind};
use crate::components::entity::Body;
use crate::components::sprite::SourceRect;
use crate::core::collision::{CollisionData, CollisionPeer};
use crate::core::rng::Rng;
use crate::input::state::InputState;

pub use collectible::Collectible;
pub use platform::{Platform, PlatformContext};
pub use player::{Facing, Player, PlayerMotion, PlayerSheets};

/// Everything a behavior may read or mutate during its update.
pub struct TickContext<'a> {
    /// Entity being updated (for logging).
    pub id: EntityId,
    pub dt: f32,
    pub input: &'a InputState,
    pub config: &'a GameConfig,
    pub rng: &'a mut Rng,
    pub platforms: &'a mut PlatformContext,
    /// Velocity of the entity's carrier, looked up this tick. `None` when
    /// there is no carrier or its handle no longer resolves.
    pub carrier_vel: Option<Vec2>,
}

#[derive(Debug, Clone)]
pub enum Behavior {
    None,
    Player(Player),
    Collectible(Collectible),
    Platform(Platform),
}

impl Behavior {
    pub fn kind(&self) -> EntityKind {
        match self {
            Behavior::None => EntityKind::Prop,
            Behavior::Player(_) => EntityKind::Player,
            Behavior::Collectible(_) => EntityKind::Collectible,
            Behavior::Platform(_) => EntityKind::Platform,
        }
    }

    pub fn carrier(&self) -> Option<EntityId> {
        match self {
            Behavior::Player(p) => p.ground_ref(),
            Behavior::Collectible(c) => c.ground_ref(),
            _ => None,
        }
    }

    pub fn clear_carrier(&mut self) {
        match self {
            Behavior::Player(p) => p.clear_ground_ref(),
            Behavior::Collectible(c) => c.clear_ground_ref(),
            _ => {}
        }
    }

    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext) {
        match self {
            Behavior::None => {}
            Behavior::Player(p) => p.update(body, ctx),
            Behavior::Collectible(c) => c.update(body, ctx),
            Behavior::Platform(p) => p.update(body, ctx),
        }
    }

    pub fn on_collision(&mut self, body: &mut Body, other: &CollisionPeer, data: &CollisionData) {
        match self {
            Behavior::Player(p) => p.on_collision(body, other, data),
            Behavior::Collectible(c) => c.on_collision(body, other, data),
            Behavior::None | Behavior::Platform(_) => {}
        }
    }

    pub fn source_rect(&self, body: &Body) -> Option<SourceRect> {
        match self {
            Behavior::Player(p) => Some(p.source_rect(body)),
            Behavior::Collectible(c) => c.source_rect(body),
            Behavior::None | Behavior::Platform(_) => None,
        }
    }
}
