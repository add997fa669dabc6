//! Protected area records and registry snapshots.

use serde::{Deserialize, Serialize};
use ward_geometry::{BlockPos, Cuboid};

/// A named volume plus the actors allowed to act inside it.
///
/// Only the two raw corners are stored; the box is rebuilt from them on
/// every use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedArea {
    pub id: String,
    /// Insertion-ordered, no duplicates.
    pub whitelist: Vec<String>,
    pub from: BlockPos,
    pub to: BlockPos,
}

impl ProtectedArea {
    #[must_use]
    pub fn new(id: impl Into<String>, from: BlockPos, to: BlockPos) -> Self {
        Self {
            id: id.into(),
            whitelist: Vec::new(),
            from,
            to,
        }
    }

    pub fn cuboid(&self) -> Cuboid {
        Cuboid::from_corners(self.from, self.to)
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.cuboid().contains(pos)
    }

    pub fn is_whitelisted(&self, actor: &str) -> bool {
        self.whitelist.iter().any(|name| name == actor)
    }
}

/// One consistent read of every area and the admin set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    /// In registration order.
    pub areas: Vec<ProtectedArea>,
    pub admins: Vec<String>,
}

impl Registry {
    pub fn is_admin(&self, actor: &str) -> bool {
        self.admins.iter().any(|admin| admin == actor)
    }

    pub fn get(&self, id: &str) -> Option<&ProtectedArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    /// The first area, in registration order, whose box contains `pos`.
    pub fn area_at(&self, pos: BlockPos) -> Option<&ProtectedArea> {
        self.areas.iter().find(|area| area.contains(pos))
    }
}
