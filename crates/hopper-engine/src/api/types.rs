/// Stable handle for an entity in the scene.
///
/// Handles are never reused within a session, so a stale handle simply fails to
/// resolve instead of pointing at a different entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Which behavior an entity runs. Collision responses branch on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Collectible,
    Platform,
    /// Plain body with no behavior of its own (walls, props, test fixtures).
    Prop,
}

impl EntityKind {
    pub fn is_platform(self) -> bool {
        self == EntityKind::Platform
    }

    pub fn is_player(self) -> bool {
        self == EntityKind::Player
    }
}
