use crate::api::config::GameConfig;
use crate::core::world::World;

/// The contract a game built on the engine fulfills.
pub trait Game {
    /// Return the session configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Spawn the scene.
    fn init(&mut self, world: &mut World);

    /// Read-only hook after every fixed step (scoring, logging, win checks).
    fn after_tick(&mut self, _world: &World) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use glam::Vec2;

    struct OneBox {
        ticks_seen: u32,
    }

    impl Game for OneBox {
        fn init(&mut self, world: &mut World) {
            let id = world.next_id();
            world.spawn(Entity::new(id).with_size(Vec2::splat(8.0)));
        }

        fn after_tick(&mut self, _world: &World) {
            self.ticks_seen += 1;
        }
    }

    #[test]
    fn default_config_and_hooks() {
        let mut game = OneBox { ticks_seen: 0 };
        let mut world = World::new(game.config());
        game.init(&mut world);
        game.after_tick(&world);
        assert_eq!(world.scene.len(), 1);
        assert_eq!(game.ticks_seen, 1);
        assert_eq!(world.config().fixed_dt, 1.0 / 60.0);
    }
}
