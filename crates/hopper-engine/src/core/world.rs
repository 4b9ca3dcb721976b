//! The simulation: registry, random source, platform bookkeeping and the
//! per-tick driver.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::sprite::SheetId;
use crate::core::collision::{self, Contact};
use crate::core::physics;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::entities::{Collectible, Platform, PlatformContext, Player, PlayerSheets, TickContext};
use crate::input::state::InputState;

pub struct World {
    config: GameConfig,
    pub scene: Scene,
    rng: Rng,
    platforms: PlatformContext,
    contacts: Vec<Contact>,
    next_id: u32,
    ticks: u64,
}

impl World {
    /// Build an empty world. The config is sanitized first.
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        log::info!(
            "world: {}x{} gravity {} seed {}",
            config.world.width, config.world.height, config.world.gravity, config.seed
        );
        Self {
            rng: Rng::new(config.seed),
            config,
            scene: Scene::new(),
            platforms: PlatformContext::new(),
            contacts: Vec::new(),
            next_id: 1,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn platform_context(&self) -> &PlatformContext {
        &self.platforms
    }

    /// Contacts resolved during the last tick, in resolution order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Generate the next unique entity ID. IDs are never reused.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.scene.get_mut(id)
    }

    /// Add a prebuilt entity.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        log::debug!("spawn {:?} {:?} at ({}, {})", id, entity.kind(), entity.body.pos.x, entity.body.pos.y);
        self.scene.spawn(entity);
        id
    }

    pub fn spawn_player(&mut self, pos: Vec2, sheets: PlayerSheets) -> EntityId {
        let id = self.next_id();
        let entity = Player::spawn(id, pos, sheets, &self.config.player);
        self.spawn(entity)
    }

    pub fn spawn_platform(&mut self, pos: Vec2, size: Vec2, ground: bool, sheet: Option<SheetId>) -> EntityId {
        let id = self.next_id();
        let entity = Platform::spawn(
            id,
            pos,
            size,
            ground,
            sheet,
            &self.config.platform,
            &mut self.platforms,
            &mut self.rng,
        );
        self.spawn(entity)
    }

    pub fn spawn_collectible(&mut self, pos: Vec2, sheet: Option<SheetId>, coin_type: u32) -> EntityId {
        let id = self.next_id();
        let entity = Collectible::spawn(id, pos, sheet, coin_type, &self.config.collectible);
        self.spawn(entity)
    }

    /// Remove an entity. Riders referencing it drop the reference on their
    /// next update.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.scene.despawn(id)
    }

    /// One fixed step: behavior updates, integration, then collision
    /// resolution with callbacks.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        self.update_entities(dt, input);
        physics::integrate(&mut self.scene, self.config.world.gravity, dt);
        collision::resolve(&mut self.scene, dt, &mut self.contacts);
        self.clamp_players();
        self.ticks += 1;
    }

    /// Players end every tick on screen, whatever their velocity.
    fn clamp_players(&mut self) {
        let width = self.config.world.width;
        for entity in self.scene.iter_mut().filter(|e| e.kind().is_player()) {
            Player::clamp_to_screen(&mut entity.body, width);
        }
    }

    fn update_entities(&mut self, dt: f32, input: &InputState) {
        for idx in 0..self.scene.len() {
            let Some(carrier) = self.scene.at(idx).map(|e| e.carrier()) else {
                continue;
            };
            // Carrier handles are looked up fresh every tick.
            let carrier_vel = carrier.and_then(|cid| self.scene.get(cid)).map(|c| c.body.vel);

            let Some(entity) = self.scene.at_mut(idx) else {
                continue;
            };
            if let (Some(cid), None) = (carrier, carrier_vel) {
                log::debug!("{:?}: carrier {:?} is gone, dropping it", entity.id, cid);
                entity.clear_carrier();
            }

            let mut ctx = TickContext {
                id: entity.id,
                dt,
                input,
                config: &self.config,
                rng: &mut self.rng,
                platforms: &mut self.platforms,
                carrier_vel,
            };
            entity.update(&mut ctx);
        }
    }
}
