//! Per-actor look-target classification.

use hashbrown::HashSet;
use tracing::{debug, trace};
use ward_policy::{LookCache, PermissionEvaluator, evaluate};
use ward_store::{BlobStore, StoreResult};

use crate::{HostWorld, RayHit};

/// Counters from one tracker pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Actors whose flag was written.
    pub classified: usize,
    /// Of those, how many are looking at a block they may not change.
    pub blocked: usize,
    /// Actors skipped because their target went stale.
    pub skipped: usize,
    /// Actors looking at nothing within range.
    pub idle: usize,
    /// Flags dropped for disconnected actors.
    pub evicted: usize,
}

/// Polls every connected actor's look-target and caches whether it is blocked.
pub struct LookTargetTracker {
    cache: LookCache,
    max_distance: f64,
    interval: u64,
    ticks: u64,
}

impl LookTargetTracker {
    /// Track look-targets up to `max_distance` blocks away, once every
    /// `interval` host ticks (an interval of 0 is treated as 1).
    #[must_use]
    pub fn new(max_distance: f64, interval: u64) -> Self {
        Self {
            cache: LookCache::new(),
            max_distance,
            interval: interval.max(1),
            ticks: 0,
        }
    }

    pub const fn cache(&self) -> &LookCache {
        &self.cache
    }

    pub fn is_blocked(&self, actor: &str) -> Option<bool> {
        self.cache.is_blocked(actor)
    }

    /// Advance one host tick. Returns `None` on ticks between passes.
    pub fn tick<W, B>(
        &mut self,
        world: &W,
        evaluator: &PermissionEvaluator<'_, B>,
    ) -> StoreResult<Option<TickStats>>
    where
        W: HostWorld,
        B: BlobStore,
    {
        let due = self.ticks % self.interval == 0;
        self.ticks = self.ticks.wrapping_add(1);
        if !due {
            return Ok(None);
        }
        self.run(world, evaluator).map(Some)
    }

    /// One classification pass over every connected actor.
    pub fn run<W, B>(
        &mut self,
        world: &W,
        evaluator: &PermissionEvaluator<'_, B>,
    ) -> StoreResult<TickStats>
    where
        W: HostWorld,
        B: BlobStore,
    {
        let registry = evaluator.snapshot()?;
        let actors = world.connected_actors();
        let mut stats = TickStats::default();

        for actor in &actors {
            let Some(RayHit { block, face }) = world.raycast(actor, self.max_distance) else {
                self.cache.remove(actor);
                stats.idle += 1;
                continue;
            };

            let target = world.neighbor(&block, face);
            if !world.is_valid(&target) {
                trace!("{actor}: look-target went stale, skipping");
                stats.skipped += 1;
                continue;
            }

            let pos = world.location(&target);
            let blocked = evaluate(&registry, actor, pos).is_denied();
            self.cache.set(actor, pos, blocked);

            stats.classified += 1;
            if blocked {
                stats.blocked += 1;
            }
        }

        let connected: HashSet<&str> = actors.iter().map(String::as_str).collect();
        stats.evicted = self.cache.retain_connected(&connected);

        debug!(?stats, "look-target pass");
        Ok(stats)
    }
}
