//! Allow/deny resolution.

use tracing::trace;
use ward_geometry::BlockPos;
use ward_store::{AreaStore, BlobStore, Registry, StoreResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Deny)
    }
}

/// Resolve `actor` acting at `pos` against one registry snapshot.
///
/// Admins bypass everything. Otherwise the first area containing `pos` in
/// registration order decides, by whitelist membership. Unprotected space is
/// open to everyone.
pub fn evaluate(registry: &Registry, actor: &str, pos: BlockPos) -> Decision {
    if registry.is_admin(actor) {
        return Decision::Allow;
    }

    match registry.area_at(pos) {
        Some(area) if area.is_whitelisted(actor) => Decision::Allow,
        Some(area) => {
            trace!("{actor} denied at {pos:?} by area {}", area.id);
            Decision::Deny
        }
        None => Decision::Allow,
    }
}

/// Resolve an effect with no acting actor (e.g. an explosion nobody lit).
///
/// No one can be admin or whitelisted, so any protected block is denied.
pub fn evaluate_unattributed(registry: &Registry, pos: BlockPos) -> Decision {
    if registry.area_at(pos).is_some() {
        Decision::Deny
    } else {
        Decision::Allow
    }
}

/// Evaluates permissions against the live store.
///
/// Holds no state of its own; every call takes a fresh snapshot.
pub struct PermissionEvaluator<'a, B> {
    store: &'a AreaStore<B>,
}

impl<B> Clone for PermissionEvaluator<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for PermissionEvaluator<'_, B> {}

impl<'a, B: BlobStore> PermissionEvaluator<'a, B> {
    pub const fn new(store: &'a AreaStore<B>) -> Self {
        Self { store }
    }

    /// Current registry, for callers batching many evaluations in one callback.
    pub fn snapshot(&self) -> StoreResult<Registry> {
        self.store.snapshot()
    }

    pub fn evaluate(&self, actor: &str, pos: BlockPos) -> StoreResult<Decision> {
        let registry = self.store.snapshot()?;
        Ok(evaluate(&registry, actor, pos))
    }

    /// First of `positions` that is denied, using one snapshot for all of them.
    ///
    /// `actor` of `None` means nobody is responsible for the action.
    pub fn first_denied(
        &self,
        actor: Option<&str>,
        positions: &[BlockPos],
    ) -> StoreResult<Option<BlockPos>> {
        let registry = self.store.snapshot()?;
        let denied = positions.iter().copied().find(|&pos| {
            let decision = match actor {
                Some(actor) => evaluate(&registry, actor, pos),
                None => evaluate_unattributed(&registry, pos),
            };
            decision.is_denied()
        });
        Ok(denied)
    }
}
