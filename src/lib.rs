// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Arena: a deterministic two-coach creature battle simulator.
//!
//! Two coaches each own a roster of creatures. A contest runs three
//! champion-selection rounds: each round both coaches field a champion, the
//! champions fight in simultaneous exchanges until one is defeated, and the
//! loser leaves its roster. No randomness anywhere: a contest is fully
//! determined by the ratings and the selections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Contest Controller            │
//! ├─────────────────────────────────────┤
//! │     Duel Loop / Combat Engine       │
//! ├─────────────────────────────────────┤
//! │     Creatures / Rosters / Ids       │
//! └─────────────────────────────────────┘
//! ```
//!
//! The I/O shell (roster files, prompts, printing) sits outside the core:
//! it feeds rosters in, answers champion selections through
//! [`contest::ChampionSelector`], and consumes the event stream through
//! [`contest::EventSink`].

pub mod battle;
pub mod contest;
pub mod error;

pub use error::{BattleError, BattleResult};

// Re-export key battle types at crate root for convenience
pub use battle::{
    Creature, CreatureCard, CreatureId, DuelOutcome, Exchange, IdRegistry, Roster, Strike,
    WeaponType, resolve_exchange, run_duel,
};
pub use contest::{
    ChampionSelector, CoachId, CoachStanding, ContestEvent, ContestResult, EventSink,
    ROUNDS_PER_CONTEST, RoundRecord, run_contest,
};
