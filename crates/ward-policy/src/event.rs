//! World actions delivered by the host before they take effect.

use smallvec::{SmallVec, smallvec};
use ward_geometry::{BlockPos, Face};

/// What an actor is about to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Break { block: BlockPos },
    Interact { block: BlockPos },
    /// Placing a block against `against`; the new block lands on the
    /// neighbor behind `face`.
    Place { against: BlockPos, face: Face },
    /// Explosions and similar multi-block effects.
    AreaEffect { blocks: Vec<BlockPos> },
}

impl Action {
    /// Every block this action would change.
    pub fn affected(&self) -> SmallVec<[BlockPos; 1]> {
        match self {
            Self::Break { block } | Self::Interact { block } => smallvec![*block],
            Self::Place { against, face } => smallvec![against.neighbor(*face)],
            Self::AreaEffect { blocks } => blocks.iter().copied().collect(),
        }
    }

    pub const fn is_single_block(&self) -> bool {
        !matches!(self, Self::AreaEffect { .. })
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Break { .. } => "break",
            Self::Interact { .. } => "interact",
            Self::Place { .. } => "place",
            Self::AreaEffect { .. } => "area effect",
        }
    }
}

/// A pending action plus the host's cancel flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    /// `None` when no actor is responsible (e.g. a stray explosion).
    pub actor: Option<String>,
    pub action: Action,
    pub cancel: bool,
}

impl ActionEvent {
    pub fn new(actor: impl Into<String>, action: Action) -> Self {
        Self {
            actor: Some(actor.into()),
            action,
            cancel: false,
        }
    }

    pub const fn unattributed(action: Action) -> Self {
        Self {
            actor: None,
            action,
            cancel: false,
        }
    }
}
