//! Error types for the battle core.

use std::fmt;

use crate::battle::CreatureId;
use crate::contest::CoachId;

/// Errors raised by the battle core.
///
/// All variants are local to the operation that detects them; a duel in
/// progress has no partial-failure state, so none are recoverable mid-duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleError {
    /// A creature was constructed with an id that is already live.
    DuplicateIdentity(CreatureId),
    /// A selector returned a creature that is not a living member of the
    /// offered roster.
    InvalidSelection {
        /// Coach whose selection was rejected.
        coach: CoachId,
        /// The offending creature id.
        id: CreatureId,
    },
    /// A removal targeted a creature that is not in the roster.
    NotInRoster(CreatureId),
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::DuplicateIdentity(id) => {
                write!(f, "creature id {id} is already registered")
            }
            BattleError::InvalidSelection { coach, id } => {
                write!(f, "coach {coach} selected creature {id}, which is not a living roster member")
            }
            BattleError::NotInRoster(id) => {
                write!(f, "creature id {id} is not in the roster")
            }
        }
    }
}

impl std::error::Error for BattleError {}

/// Result type for battle core operations.
pub type BattleResult<T> = Result<T, BattleError>;
