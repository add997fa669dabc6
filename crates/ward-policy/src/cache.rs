//! Per-actor "looking at a blocked block" flags.

use hashbrown::{HashMap, HashSet};
use ward_geometry::BlockPos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LookEntry {
    target: BlockPos,
    blocked: bool,
}

/// Flags written by the look-target tracker and read by the gate.
///
/// Transient; losing it on restart only costs one tick of classification.
#[derive(Debug, Default)]
pub struct LookCache {
    entries: HashMap<String, LookEntry>,
}

impl LookCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, actor: &str, target: BlockPos, blocked: bool) {
        let entry = LookEntry { target, blocked };
        match self.entries.get_mut(actor) {
            Some(existing) => *existing = entry,
            None => {
                self.entries.insert(actor.to_owned(), entry);
            }
        }
    }

    /// Whether `actor`'s current look-target is protected against them.
    pub fn is_blocked(&self, actor: &str) -> Option<bool> {
        self.entries.get(actor).map(|entry| entry.blocked)
    }

    /// The look-target the flag was computed for.
    pub fn target(&self, actor: &str) -> Option<BlockPos> {
        self.entries.get(actor).map(|entry| entry.target)
    }

    /// Drop entries for actors not in `connected`.
    pub fn retain_connected(&mut self, connected: &HashSet<&str>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|actor, _| connected.contains(actor.as_str()));
        before - self.entries.len()
    }

    pub fn remove(&mut self, actor: &str) -> bool {
        self.entries.remove(actor).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
