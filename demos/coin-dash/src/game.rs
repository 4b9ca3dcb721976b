use std::collections::HashSet;

use glam::Vec2;
use hopper_engine::*;

// Texture sheets, in the order the host page loads them.
pub const SHEET_IDLE: SheetId = SheetId(0);
pub const SHEET_WALK_LEFT: SheetId = SheetId(1);
pub const SHEET_WALK_RIGHT: SheetId = SheetId(2);
pub const SHEET_JUMP_LEFT: SheetId = SheetId(3);
pub const SHEET_JUMP_RIGHT: SheetId = SheetId(4);
pub const SHEET_GROUND: SheetId = SheetId(5);
pub const SHEET_PLATFORM: SheetId = SheetId(6);
pub const SHEET_COINS: SheetId = SheetId(7);

const PLATFORM_HEIGHT: f32 = 75.0;

/// (x, y, width) of each floating platform, left to right.
const PLATFORMS: [(f32, f32, f32); 4] = [
    (600.0, 500.0, 200.0),
    (1000.0, 600.0, 300.0),
    (1500.0, 390.0, 200.0),
    (1900.0, 550.0, 100.0),
];

/// (x, y, coin type) of each starting coin.
const COINS: [(f32, f32, u32); 9] = [
    (300.0, 650.0, 0),
    (450.0, 650.0, 1),
    (600.0, 650.0, 2),
    (750.0, 600.0, 0),
    (900.0, 600.0, 1),
    (1100.0, 600.0, 2),
    (1300.0, 600.0, 0),
    (1600.0, 550.0, 1),
    (1800.0, 500.0, 2),
];

/// Run and jump across drifting platforms collecting coins.
pub struct CoinDash {
    player: Option<EntityId>,
    score: u32,
    /// Coins currently hidden after being picked up.
    collected: HashSet<EntityId>,
}

impl CoinDash {
    pub fn new() -> Self {
        Self {
            player: None,
            score: 0,
            collected: HashSet::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }
}

impl Game for CoinDash {
    fn init(&mut self, world: &mut World) {
        let sheets = PlayerSheets {
            idle: Some(SHEET_IDLE),
            walk_left: Some(SHEET_WALK_LEFT),
            walk_right: Some(SHEET_WALK_RIGHT),
            jump_left: Some(SHEET_JUMP_LEFT),
            jump_right: Some(SHEET_JUMP_RIGHT),
        };
        let spawn = world.config().player.spawn;
        self.player = Some(world.spawn_player(spawn, sheets));

        world.spawn_platform(
            Vec2::new(0.0, 725.0),
            Vec2::new(400.0, PLATFORM_HEIGHT),
            true,
            Some(SHEET_GROUND),
        );
        for &(x, y, w) in PLATFORMS.iter() {
            world.spawn_platform(Vec2::new(x, y), Vec2::new(w, PLATFORM_HEIGHT), false, Some(SHEET_PLATFORM));
        }

        for &(x, y, coin_type) in COINS.iter() {
            world.spawn_collectible(Vec2::new(x, y), Some(SHEET_COINS), coin_type);
        }

        log::info!("CoinDash: spawned {} entities", world.scene.len());
    }

    fn after_tick(&mut self, world: &World) {
        for entity in world.scene.iter() {
            let Behavior::Collectible(coin) = &entity.behavior else {
                continue;
            };
            if coin.is_collected() {
                if self.collected.insert(entity.id) {
                    self.score += 1;
                    log::info!("CoinDash: coin {} collected, score {}", entity.id.0, self.score);
                }
            } else {
                self.collected.remove(&entity.id);
            }
        }
    }
}
