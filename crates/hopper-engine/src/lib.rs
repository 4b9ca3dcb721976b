pub mod api;
pub mod core;
pub mod components;
pub mod entities;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::Game;
pub use api::config::{GameConfig, WorldConfig, PlayerConfig, CollectibleConfig, PlatformConfig, SpawnRange};
pub use api::types::{EntityId, EntityKind};
pub use components::entity::{Body, Entity};
pub use components::sprite::{SheetId, SourceRect, TextureSheet};
pub use components::animation::FrameAnimator;
pub use core::collision::{CollisionData, CollisionPeer, Contact};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use core::world::World;
pub use entities::{Behavior, Collectible, Facing, Platform, PlatformContext, Player, PlayerMotion, PlayerSheets, TickContext};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, Key};
pub use renderer::instance::{DrawBuffer, DrawInstance};
pub use systems::render::build_draw_buffer;
