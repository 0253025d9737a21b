//! Duel state machine.
//!
//! Drives repeated exchanges between two selected creatures until one is
//! defeated. The first creature's health is always checked first, so a
//! mutual knockout resolves against the first creature.

use crate::battle::combat::{Exchange, resolve_exchange};
use crate::battle::Creature;

/// Terminal state of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    /// The first creature fell; the second wins the round.
    FirstDefeated,
    /// The second creature fell; the first wins the round.
    SecondDefeated,
}

/// Run a duel to its terminal state.
///
/// While both creatures are alive, one exchange is resolved per iteration
/// and reported through `on_exchange`. After the loop the first creature is
/// checked first: if it is down, [`DuelOutcome::FirstDefeated`] is returned
/// even when the second creature is down as well (simultaneous knockouts
/// favor the second creature).
///
/// Termination precondition: at least one side must be able to pierce the
/// other's defense, otherwise every exchange is absorbed and the loop never
/// ends. The roster-file loader rejects non-positive attack ratings as the
/// shell-level guard.
pub fn run_duel(
    first: &mut Creature,
    second: &mut Creature,
    mut on_exchange: impl FnMut(&Exchange),
) -> DuelOutcome {
    while first.is_alive() && second.is_alive() {
        let exchange = resolve_exchange(first, second);
        on_exchange(&exchange);
    }

    if !first.is_alive() {
        DuelOutcome::FirstDefeated
    } else {
        DuelOutcome::SecondDefeated
    }
}
