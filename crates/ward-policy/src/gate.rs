//! Event-time enforcement.

use tracing::debug;
use ward_geometry::BlockPos;
use ward_store::{BlobStore, StoreResult};

use crate::{ActionEvent, LookCache, PermissionEvaluator};

/// How single-block actions are decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateMode {
    /// Evaluate the affected block against a fresh registry snapshot.
    #[default]
    Evaluate,
    /// Trust the look-target tracker's cached flag when it was computed for
    /// exactly the block the action changes, falling back to evaluation
    /// otherwise. Area effects are always evaluated.
    Cached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    /// Cancelled because of the block at `at`.
    Cancel { at: BlockPos },
}

impl Verdict {
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel { .. })
    }
}

/// Cancels actions that touch blocks the actor may not change.
///
/// Multi-block effects are all-or-nothing: one denied block cancels the whole
/// action. The gate only ever raises the event's cancel flag, it never clears
/// one set by someone else.
pub struct PolicyGate<'a, B> {
    evaluator: PermissionEvaluator<'a, B>,
    mode: GateMode,
}

impl<'a, B: BlobStore> PolicyGate<'a, B> {
    pub const fn new(evaluator: PermissionEvaluator<'a, B>, mode: GateMode) -> Self {
        Self { evaluator, mode }
    }

    pub const fn mode(&self) -> GateMode {
        self.mode
    }

    pub fn handle(&self, event: &mut ActionEvent, looks: &LookCache) -> StoreResult<Verdict> {
        let verdict = self.decide(event, looks)?;

        if let Verdict::Cancel { at } = verdict {
            event.cancel = true;
            debug!(
                "Cancelled {} by {} at {at:?}",
                event.action.kind(),
                event.actor.as_deref().unwrap_or("<world>")
            );
        }
        Ok(verdict)
    }

    fn decide(&self, event: &ActionEvent, looks: &LookCache) -> StoreResult<Verdict> {
        let affected = event.action.affected();
        let actor = event.actor.as_deref();

        if self.mode == GateMode::Cached && event.action.is_single_block() {
            if let (Some(actor), Some(&at)) = (actor, affected.first()) {
                // the flag only speaks for the block it was computed on
                if looks.target(actor) == Some(at) {
                    if let Some(blocked) = looks.is_blocked(actor) {
                        return Ok(if blocked {
                            Verdict::Cancel { at }
                        } else {
                            Verdict::Allow
                        });
                    }
                }
            }
        }

        Ok(match self.evaluator.first_denied(actor, &affected)? {
            Some(at) => Verdict::Cancel { at },
            None => Verdict::Allow,
        })
    }
}
