//! Permission policy for protected areas.
//!
//! # Resolution
//!
//! ```text
//! actor is admin ─────────────────────────────► Allow
//! first area containing pos (registry order)
//!     ├─ actor on its whitelist ──────────────► Allow
//!     └─ otherwise ───────────────────────────► Deny
//! no area contains pos ───────────────────────► Allow
//! ```
//!
//! [`PermissionEvaluator`] reads a fresh [`Registry`](ward_store::Registry) on
//! every call. [`PolicyGate`] maps host [`ActionEvent`]s to the blocks they
//! touch and cancels the whole action if any of them is denied.

mod cache;
mod evaluator;
mod event;
mod gate;

pub use cache::LookCache;
pub use evaluator::{Decision, PermissionEvaluator, evaluate, evaluate_unattributed};
pub use event::{Action, ActionEvent};
pub use gate::{GateMode, PolicyGate, Verdict};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Action, ActionEvent, Decision, GateMode, LookCache, PermissionEvaluator, PolicyGate,
        Verdict,
    };
}
