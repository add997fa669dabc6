//! What the tracker needs from the host world.

use ward_geometry::{BlockPos, Face};

/// Result of an actor's view raycast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RayHit<K> {
    pub block: K,
    /// Face of `block` the ray struck.
    pub face: Face,
}

/// Host world primitives. All calls are synchronous and bounded.
pub trait HostWorld {
    /// Host handle to a block. May go stale when the world changes.
    type Block;

    fn connected_actors(&self) -> Vec<String>;

    /// Forward view ray of `actor`, at most `max_distance` blocks long.
    fn raycast(&self, actor: &str, max_distance: f64) -> Option<RayHit<Self::Block>>;

    fn neighbor(&self, block: &Self::Block, face: Face) -> Self::Block;

    fn is_valid(&self, block: &Self::Block) -> bool;

    fn location(&self, block: &Self::Block) -> BlockPos;
}
