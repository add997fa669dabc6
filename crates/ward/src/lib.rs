//! Spatial access control for a shared block world.
//!
//! Operators register protected boxes, each with a whitelist, plus a global
//! admin list. The [`Ward`] owns the registry and wires it into the two host
//! entry points:
//!
//! - [`Ward::on_action`]: before-event hook that cancels disallowed
//!   break/place/interact/area-effect actions.
//! - [`Ward::on_tick`]: fixed-rate hook that classifies every actor's
//!   look-target.
//!
//! # Example
//!
//! ```ignore
//! use ward::prelude::*;
//!
//! let mut ward = Ward::open(&WardConfig::from_env())?;
//! ward.store().register("base", (0, 0, 0).into(), (10, 10, 10).into())?;
//!
//! let mut event = ActionEvent::new("eve", Action::Break { block: (5, 5, 5).into() });
//! ward.on_action(&mut event)?;
//! assert!(event.cancel);
//! ```

mod config;

use thiserror::Error;
use tracing::info;
use ward_border::{BorderError, BorderVisualizer, MarkerSink};
use ward_policy::{ActionEvent, GateMode, PermissionEvaluator, PolicyGate, Verdict};
use ward_store::{AreaStore, BlobStore, LmdbBlobs, StoreError, StoreResult};
use ward_tick::{HostWorld, LookTargetTracker, TickStats};

pub use config::WardConfig;

#[derive(Debug, Error)]
pub enum WardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Border(#[from] BorderError),
}

pub type WardResult<T> = Result<T, WardError>;

/// The protected-area engine, constructed once at startup.
pub struct Ward<B> {
    store: AreaStore<B>,
    tracker: LookTargetTracker,
    border: BorderVisualizer,
    gate_mode: GateMode,
}

impl Ward<LmdbBlobs> {
    /// Open the LMDB-backed registry at `config.db_path`.
    pub fn open(config: &WardConfig) -> StoreResult<Self> {
        let blobs = LmdbBlobs::open(&config.db_path)?;
        Self::new(blobs, config)
    }
}

impl<B: BlobStore> Ward<B> {
    pub fn new(blobs: B, config: &WardConfig) -> StoreResult<Self> {
        let store = AreaStore::open(blobs)?;
        info!(
            "Ward ready: {} protected areas, {} admins, gate mode {:?}",
            store.list()?.len(),
            store.list_admins()?.len(),
            config.gate_mode
        );

        Ok(Self {
            store,
            tracker: LookTargetTracker::new(config.raycast_distance, config.look_interval),
            border: BorderVisualizer::new(config.border_max_points),
            gate_mode: config.gate_mode,
        })
    }

    /// Registry operations for the command surface.
    pub const fn store(&self) -> &AreaStore<B> {
        &self.store
    }

    pub const fn evaluator(&self) -> PermissionEvaluator<'_, B> {
        PermissionEvaluator::new(&self.store)
    }

    pub const fn gate(&self) -> PolicyGate<'_, B> {
        PolicyGate::new(self.evaluator(), self.gate_mode)
    }

    pub const fn tracker(&self) -> &LookTargetTracker {
        &self.tracker
    }

    /// Decide a pending action, raising its cancel flag when denied.
    pub fn on_action(&self, event: &mut ActionEvent) -> StoreResult<Verdict> {
        self.gate().handle(event, self.tracker.cache())
    }

    /// Advance the look-target tracker by one host tick.
    pub fn on_tick<W: HostWorld>(&mut self, world: &W) -> StoreResult<Option<TickStats>> {
        let evaluator = PermissionEvaluator::new(&self.store);
        self.tracker.tick(world, &evaluator)
    }

    /// Render the border of area `id`. Returns `None` if there is no such area.
    pub fn show_border(&self, id: &str, sink: &mut impl MarkerSink) -> WardResult<Option<usize>> {
        let Some(area) = self.store.get(id)? else {
            return Ok(None);
        };
        Ok(Some(self.border.render_area(&area, sink)?))
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Ward, WardConfig, WardError, WardResult};
    pub use ward_border::{BorderVisualizer, MarkerSink};
    pub use ward_geometry::{BlockPos, Cuboid, Face};
    pub use ward_policy::prelude::*;
    pub use ward_store::{AreaStore, BlobStore, LmdbBlobs, MemoryBlobs, ProtectedArea, StoreError};
    pub use ward_tick::{HostWorld, LookTargetTracker, RayHit, TickStats};
}
