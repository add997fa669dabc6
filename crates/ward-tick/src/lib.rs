//! Look-target tracking.
//!
//! # Tick Execution Model
//!
//! ```text
//! Tick N (every `interval` host ticks):
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Phase 1: Read one registry snapshot                        │
//! │  Phase 2: For each connected actor                          │
//! │             raycast → struck face → neighbor block          │
//! │             skip if the block went stale                    │
//! │             evaluate → write LookCache flag                 │
//! │  Phase 3: Evict flags of disconnected actors                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! This moves the per-area scan off the event path: handlers can read the
//! cached flag instead of walking every area inline.

mod host;
mod tracker;

pub use host::{HostWorld, RayHit};
pub use tracker::{LookTargetTracker, TickStats};
