use hopper_engine::{
    build_draw_buffer, DrawBuffer, DrawInstance, FixedTimestep, Game, InputEvent, InputQueue,
    InputState, World,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    world: World,
    input: InputQueue,
    keys: InputState,
    draw: DrawBuffer,
    timestep: FixedTimestep,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let world = World::new(game.config());
        let config = world.config();
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);

        Self {
            game,
            world,
            input: InputQueue::new(),
            keys: InputState::new(),
            draw: DrawBuffer::new(),
            timestep,
            initialized: false,
        }
    }

    /// Spawn the game's scene. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.world);
        build_draw_buffer(self.world.scene.iter(), &mut self.draw);
        self.initialized = true;
        log::info!("runner: initialized with {} entities", self.world.scene.len());
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one rendered frame: fold input, run the fixed steps it is owed,
    /// rebuild the draw list.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        self.keys.begin_frame(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.world.tick(self.timestep.dt(), &self.keys);
            self.game.after_tick(&self.world);
            // A press is seen by the first step of the frame only.
            self.keys.clear_just_pressed();
        }

        build_draw_buffer(self.world.scene.iter(), &mut self.draw);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn draw_buffer(&self) -> &DrawBuffer {
        &self.draw
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const u8 {
        self.draw.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.draw.instance_count()
    }

    pub fn instance_stride(&self) -> u32 {
        DrawInstance::STRIDE_BYTES as u32
    }

    pub fn world_width(&self) -> f32 {
        self.world.config().world.width
    }

    pub fn world_height(&self) -> f32 {
        self.world.config().world.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopper_engine::{EntityId, GameConfig, PlayerSheets};

    struct Faller {
        player: Option<EntityId>,
        steps: u32,
    }

    impl Game for Faller {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 0.01,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, world: &mut World) {
            let spawn = world.config().player.spawn;
            self.player = Some(world.spawn_player(spawn, PlayerSheets::default()));
        }

        fn after_tick(&mut self, _world: &World) {
            self.steps += 1;
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Faller { player: None, steps: 0 });
        runner.tick(0.5);
        assert_eq!(runner.game().steps, 0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn frame_time_maps_to_fixed_steps() {
        let mut runner = GameRunner::new(Faller { player: None, steps: 0 });
        runner.init();
        runner.tick(0.035);
        assert_eq!(runner.game().steps, 3);
        assert_eq!(runner.world().ticks(), 3);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.instance_stride(), 40);
    }

    #[test]
    fn key_events_reach_the_player() {
        let mut runner = GameRunner::new(Faller { player: None, steps: 0 });
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: 68 });
        runner.tick(0.01);

        let id = runner.game().player.unwrap();
        assert_eq!(runner.world().get(id).unwrap().body.vel.x, 200.0);
        assert_eq!(runner.world_width(), 1200.0);
    }
}
