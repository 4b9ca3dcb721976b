//! Coins: fall, ride platforms, vanish on pickup and come back later.

use glam::Vec2;

use crate::api::config::CollectibleConfig;
use crate::api::types::EntityId;
use crate::components::animation::FrameAnimator;
use crate::components::entity::{Body, Entity};
use crate::components::sprite::{SheetId, SourceRect, TextureSheet};
use crate::core::collision::{CollisionData, CollisionPeer};
use crate::core::rng::Rng;
use crate::entities::{Behavior, TickContext};

const SHEET_FRAMES: u32 = 7;
const FRAME_SIZE: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct Collectible {
    /// Sheet row, one per coin design.
    coin_type: u32,
    collected: bool,
    respawn_timer: f32,
    anim: FrameAnimator,
    ground_ref: Option<EntityId>,
    /// Box restored on respawn; collected coins shrink to zero.
    base_size: Vec2,
}

impl Collectible {
    pub fn spawn(id: EntityId, pos: Vec2, sheet: Option<SheetId>, coin_type: u32, config: &CollectibleConfig) -> Entity {
        let coin = Collectible {
            coin_type: coin_type.min(config.kinds.saturating_sub(1)),
            collected: false,
            respawn_timer: 0.0,
            anim: FrameAnimator::new(SHEET_FRAMES, config.frame_delay),
            ground_ref: None,
            base_size: config.size,
        };
        Entity::new(id)
            .with_tag("coin")
            .with_pos(pos)
            .with_size(config.size)
            .with_physics(true, true)
            .with_sheet(TextureSheet::new(sheet, SHEET_FRAMES, config.kinds, FRAME_SIZE, FRAME_SIZE))
            .with_behavior(Behavior::Collectible(coin))
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    pub fn respawn_timer(&self) -> f32 {
        self.respawn_timer
    }

    pub fn ground_ref(&self) -> Option<EntityId> {
        self.ground_ref
    }

    pub fn clear_ground_ref(&mut self) {
        self.ground_ref = None;
    }

    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext) {
        let config = &ctx.config.collectible;

        if self.collected {
            self.respawn_timer += ctx.dt;
            if self.respawn_timer >= config.respawn_delay {
                self.respawn(body, config, ctx.rng);
                log::debug!("coin {:?} respawned at ({}, {})", ctx.id, body.pos.x, body.pos.y);
            }
            return;
        }

        if body.pos.y > config.fall_limit {
            self.respawn(body, config, ctx.rng);
            log::debug!("coin {:?} fell off screen, respawned at ({}, {})", ctx.id, body.pos.x, body.pos.y);
            return;
        }

        if body.grounded {
            if let Some(v) = ctx.carrier_vel {
                body.vel.x = v.x;
            }
        }

        // Re-derived by this tick's collisions.
        body.grounded = false;
        self.ground_ref = None;

        self.anim.tick(ctx.dt);
    }

    pub fn on_collision(&mut self, body: &mut Body, other: &CollisionPeer, data: &CollisionData) {
        if self.collected {
            return;
        }
        if other.kind.is_player() {
            self.collected = true;
            self.respawn_timer = 0.0;
            body.visible = false;
            body.size = Vec2::ZERO;
            return;
        }
        if other.kind.is_platform() && data.is_top() {
            body.grounded = true;
            body.vel.y = 0.0;
            body.pos.y = other.pos.y - body.size.y;
            self.ground_ref = Some(other.id);
        }
    }

    pub fn source_rect(&self, body: &Body) -> Option<SourceRect> {
        if self.collected {
            return None;
        }
        Some(body.sheet.sample(self.anim.frame, self.coin_type))
    }

    /// Fresh position off the right edge, fresh leftward speed, fresh design.
    fn respawn(&mut self, body: &mut Body, config: &CollectibleConfig, rng: &mut Rng) {
        body.pos.x = rng.range_int(config.respawn_x.min, config.respawn_x.max);
        body.pos.y = rng.range_int(config.respawn_y.min, config.respawn_y.max);
        body.vel = Vec2::new(-rng.range_int(config.respawn_speed.min, config.respawn_speed.max), 0.0);
        body.grounded = false;
        body.visible = true;
        body.size = self.base_size;
        self.ground_ref = None;
        self.collected = false;
        self.respawn_timer = 0.0;
        self.coin_type = rng.next_int(config.kinds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use crate::api::types::EntityKind;
    use crate::entities::PlatformContext;
    use crate::input::state::InputState;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        config: GameConfig,
        rng: Rng,
        platforms: PlatformContext,
        coin: Entity,
    }

    impl Rig {
        fn new() -> Self {
            let config = GameConfig::default();
            let coin = Collectible::spawn(EntityId(2), Vec2::new(300.0, 650.0), Some(SheetId(8)), 1, &config.collectible);
            Self {
                config,
                rng: Rng::new(11),
                platforms: PlatformContext::new(),
                coin,
            }
        }

        fn update(&mut self, carrier_vel: Option<Vec2>) {
            let input = InputState::new();
            let mut ctx = TickContext {
                id: self.coin.id,
                dt: DT,
                input: &input,
                config: &self.config,
                rng: &mut self.rng,
                platforms: &mut self.platforms,
                carrier_vel,
            };
            self.coin.update(&mut ctx);
        }

        fn hit(&mut self, kind: EntityKind, data: CollisionData) {
            let peer = CollisionPeer {
                id: EntityId(1),
                kind,
                pos: Vec2::new(0.0, 700.0),
                vel: Vec2::new(-100.0, 0.0),
                size: Vec2::new(400.0, 75.0),
            };
            self.coin.on_collision(&peer, &data);
        }

        fn state(&self) -> &Collectible {
            match &self.coin.behavior {
                Behavior::Collectible(c) => c,
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn player_contact_collects() {
        let mut rig = Rig::new();
        rig.hit(EntityKind::Player, CollisionData::LEFT);
        assert!(rig.state().is_collected());
        assert!(!rig.coin.body.visible);
        assert_eq!(rig.coin.body.size, Vec2::ZERO);
        assert_eq!(rig.coin.source_rect(), None);
    }

    #[test]
    fn collected_coin_ignores_further_contacts() {
        let mut rig = Rig::new();
        rig.hit(EntityKind::Player, CollisionData::TOP);
        rig.coin.body.vel.y = 300.0;
        rig.hit(EntityKind::Platform, CollisionData::TOP);
        assert!(!rig.coin.body.grounded);
        assert_eq!(rig.coin.body.vel.y, 300.0);
    }

    #[test]
    fn landing_on_platform_snaps_and_records_carrier() {
        let mut rig = Rig::new();
        rig.coin.body.vel.y = 250.0;
        rig.hit(EntityKind::Platform, CollisionData::TOP);
        assert!(rig.coin.body.grounded);
        assert_eq!(rig.coin.body.vel.y, 0.0);
        assert_eq!(rig.coin.body.pos.y, 650.0);
        assert_eq!(rig.coin.carrier(), Some(EntityId(1)));
    }

    #[test]
    fn grounded_coin_rides_its_carrier() {
        let mut rig = Rig::new();
        rig.hit(EntityKind::Platform, CollisionData::TOP);
        rig.update(Some(Vec2::new(-100.0, 0.0)));
        assert_eq!(rig.coin.body.vel.x, -100.0);
        assert!(!rig.coin.body.grounded);
        assert_eq!(rig.coin.carrier(), None);
    }

    #[test]
    fn side_contact_with_platform_does_not_ground() {
        let mut rig = Rig::new();
        rig.hit(EntityKind::Platform, CollisionData::RIGHT);
        assert!(!rig.coin.body.grounded);
    }

    #[test]
    fn respawns_after_delay_within_bounds() {
        let mut rig = Rig::new();
        rig.hit(EntityKind::Player, CollisionData::TOP);

        let mut ticks = 0;
        let mut last_timer = rig.state().respawn_timer();
        assert_eq!(last_timer, 0.0);
        while rig.state().is_collected() {
            rig.update(None);
            ticks += 1;
            assert!(ticks <= 121, "coin never respawned");
            if rig.state().is_collected() {
                assert!(rig.state().respawn_timer() > last_timer);
                last_timer = rig.state().respawn_timer();
            }
        }
        assert_eq!(rig.state().respawn_timer(), 0.0);
        assert!(ticks >= 119, "respawned early after {} ticks", ticks);

        let c = &rig.config.collectible;
        assert!(rig.coin.body.visible);
        assert_eq!(rig.coin.body.size, Vec2::new(50.0, 50.0));
        assert!(c.respawn_x.contains(rig.coin.body.pos.x));
        assert!(c.respawn_y.contains(rig.coin.body.pos.y));
        assert!(c.respawn_speed.contains(-rig.coin.body.vel.x));
        assert_eq!(rig.coin.body.vel.y, 0.0);
        assert!(rig.state().coin_type() < 3);
    }

    #[test]
    fn falling_off_screen_respawns_immediately() {
        let mut rig = Rig::new();
        rig.coin.body.pos.y = 801.0;
        rig.coin.body.vel.y = 2000.0;
        rig.update(None);
        assert!(rig.config.collectible.respawn_y.contains(rig.coin.body.pos.y));
        assert_eq!(rig.coin.body.vel.y, 0.0);
        assert!(!rig.state().is_collected());
    }

    #[test]
    fn source_rect_uses_coin_row() {
        let rig = Rig::new();
        assert_eq!(
            rig.coin.source_rect(),
            Some(SourceRect { x: 0.0, y: 18.0, w: 18.0, h: 18.0 })
        );
    }

    #[test]
    fn coin_type_is_clamped_to_sheet_rows() {
        let config = CollectibleConfig::default();
        let coin = Collectible::spawn(EntityId(1), Vec2::ZERO, None, 9, &config);
        match &coin.behavior {
            Behavior::Collectible(c) => assert_eq!(c.coin_type(), 2),
            _ => unreachable!(),
        }
    }
}
