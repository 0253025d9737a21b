//! Battle core.
//!
//! Implements the combat resolution and roster-attrition state machine:
//! - Creatures with immutable ratings and defense-resolved health
//! - A live-id registry with scoped registration
//! - Simultaneous single-exchange combat
//! - The duel loop that runs exchanges to a terminal state
//! - Rosters with removal-on-defeat and the all-defeated check

mod combat;
mod creature;
mod duel;
mod registry;
mod roster;

pub use combat::{Exchange, Strike, resolve_exchange};
pub use creature::{Creature, CreatureCard, CreatureId, WeaponType};
pub use duel::{DuelOutcome, run_duel};
pub use registry::{IdRegistry, IdTag};
pub use roster::Roster;
