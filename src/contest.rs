//! Contest orchestration.
//!
//! A contest is a fixed sequence of three champion-selection rounds between
//! two coaches. Each round both coaches pick a living member of their
//! roster, the champions duel to a terminal state, and the defeated
//! creature leaves its roster. Rounds scheduled after a roster has been
//! fully defeated are skipped. After the third round the contest ends
//! unconditionally and final standings are reported.

mod roster_file;

pub use roster_file::{CreatureRecord, RosterFileError, build_roster, load_roster, parse_roster};

use serde::Serialize;

use crate::battle::{CreatureCard, CreatureId, DuelOutcome, Exchange, Roster, run_duel};
use crate::error::BattleError;

/// Identifier for a coach (1 or 2).
pub type CoachId = u8;

/// Number of champion-selection rounds in a contest.
pub const ROUNDS_PER_CONTEST: u32 = 3;

/// Picks a champion from a roster.
///
/// Blocking and synchronous; an interactive implementation may prompt and
/// retry as long as it likes, but the id it finally returns must belong to
/// a living member of the offered roster or the contest fails closed with
/// [`BattleError::InvalidSelection`].
pub trait ChampionSelector {
    /// Choose a champion id for `coach` from `roster`.
    fn choose(&mut self, coach: CoachId, roster: &Roster) -> CreatureId;
}

impl<F: FnMut(CoachId, &Roster) -> CreatureId> ChampionSelector for F {
    fn choose(&mut self, coach: CoachId, roster: &Roster) -> CreatureId {
        self(coach, roster)
    }
}

/// Consumes the contest's event stream for display.
pub trait EventSink {
    /// Handle one event.
    fn on_event(&mut self, event: &ContestEvent);
}

impl<F: FnMut(&ContestEvent)> EventSink for F {
    fn on_event(&mut self, event: &ContestEvent) {
        self(event)
    }
}

/// Events emitted while a contest runs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestEvent {
    /// A coach committed to a champion for the round.
    ChampionSelected {
        /// Round number (1-based).
        round: u32,
        /// The selecting coach.
        coach: CoachId,
        /// Snapshot of the chosen champion.
        champion: CreatureCard,
    },
    /// One simultaneous exchange was resolved.
    ExchangeResolved {
        /// Round number (1-based).
        round: u32,
        /// Both strikes, with raw-rating damage.
        exchange: Exchange,
    },
    /// A round's duel reached its terminal state.
    RoundWon {
        /// Round number (1-based).
        round: u32,
        /// The winning coach.
        coach: CoachId,
        /// Snapshot of the defeated creature, residual health included.
        defeated: CreatureCard,
    },
    /// A scheduled round did not run because a roster was fully defeated.
    RoundSkipped {
        /// Round number (1-based).
        round: u32,
    },
    /// The contest ended; both coaches' final standings.
    ContestEnded {
        /// Standings for coach 1 and coach 2.
        standings: [CoachStanding; 2],
    },
}

/// Remaining members of one coach's roster at contest end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachStanding {
    /// The coach.
    pub coach: CoachId,
    /// Members still in the roster, with residual health, in roster order.
    /// A creature is only removed by losing a duel, so after a mutual
    /// knockout the winning side's champion stays listed at zero health.
    pub survivors: Vec<CreatureCard>,
}

/// Outcome of a single round slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    /// Round number (1-based).
    pub round: u32,
    /// Winning coach, or `None` when the round was skipped.
    pub winner: Option<CoachId>,
    /// The creature defeated in this round, if the round ran.
    pub defeated: Option<CreatureCard>,
}

/// Final result of a contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestResult {
    /// One record per round slot, in order.
    pub rounds: Vec<RoundRecord>,
    /// Final standings for both coaches.
    pub standings: [CoachStanding; 2],
}

/// Run a full three-round contest.
///
/// Takes ownership of both rosters and drives them to the end of the
/// contest; the selection and reporting collaborators are borrowed for the
/// duration. One duel per round; champions are re-selected every round.
///
/// # Errors
///
/// Returns [`BattleError::InvalidSelection`] if a selector names a creature
/// that is not a living member of the offered roster, and
/// [`BattleError::NotInRoster`] only on internal bookkeeping failure.
pub fn run_contest<S: ChampionSelector, E: EventSink>(
    mut roster1: Roster,
    mut roster2: Roster,
    selector: &mut S,
    sink: &mut E,
) -> Result<ContestResult, BattleError> {
    let mut rounds = Vec::new();

    for round in 1..=ROUNDS_PER_CONTEST {
        if roster1.all_defeated() || roster2.all_defeated() {
            sink.on_event(&ContestEvent::RoundSkipped { round });
            rounds.push(RoundRecord {
                round,
                winner: None,
                defeated: None,
            });
            continue;
        }

        let id1 = select_champion(round, 1, &roster1, selector, sink)?;
        let id2 = select_champion(round, 2, &roster2, selector, sink)?;

        let outcome = match (roster1.get_mut(id1), roster2.get_mut(id2)) {
            (Some(first), Some(second)) => run_duel(first, second, |exchange| {
                sink.on_event(&ContestEvent::ExchangeResolved {
                    round,
                    exchange: *exchange,
                });
            }),
            (None, _) => return Err(BattleError::InvalidSelection { coach: 1, id: id1 }),
            (_, None) => return Err(BattleError::InvalidSelection { coach: 2, id: id2 }),
        };

        let (winner, defeated) = match outcome {
            DuelOutcome::FirstDefeated => (2, roster1.remove(id1)?),
            DuelOutcome::SecondDefeated => (1, roster2.remove(id2)?),
        };

        let card = defeated.card();
        sink.on_event(&ContestEvent::RoundWon {
            round,
            coach: winner,
            defeated: card.clone(),
        });
        rounds.push(RoundRecord {
            round,
            winner: Some(winner),
            defeated: Some(card),
        });
        // `defeated` drops here, releasing its id.
    }

    let standings = [
        CoachStanding {
            coach: 1,
            survivors: roster1.cards(),
        },
        CoachStanding {
            coach: 2,
            survivors: roster2.cards(),
        },
    ];
    sink.on_event(&ContestEvent::ContestEnded {
        standings: standings.clone(),
    });

    Ok(ContestResult { rounds, standings })
}

/// Ask the selector for a champion and validate the answer.
///
/// Fails closed: an id that is not a living current member is rejected, and
/// never silently substituted.
fn select_champion<S: ChampionSelector, E: EventSink>(
    round: u32,
    coach: CoachId,
    roster: &Roster,
    selector: &mut S,
    sink: &mut E,
) -> Result<CreatureId, BattleError> {
    let id = selector.choose(coach, roster);
    match roster.get(id) {
        Some(champion) if champion.is_alive() => {
            sink.on_event(&ContestEvent::ChampionSelected {
                round,
                coach,
                champion: champion.card(),
            });
            Ok(id)
        }
        _ => Err(BattleError::InvalidSelection { coach, id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Creature, IdRegistry, WeaponType};

    fn creature(
        registry: &IdRegistry,
        id: CreatureId,
        health: i32,
        attack: u32,
        defense: u32,
    ) -> Creature {
        Creature::new(registry, id, format!("c{id}"), WeaponType::Punch, health, attack, defense)
            .unwrap()
    }

    fn first_living_selector() -> impl ChampionSelector {
        |_coach: CoachId, roster: &Roster| {
            roster.first_living().map_or(0, Creature::id)
        }
    }

    #[test]
    fn test_single_duel_contest() {
        // [A(atk 10, def 0, hp 10)] vs [B(atk 5, def 0, hp 10)]: one
        // exchange decides the round for coach 1.
        let registry = IdRegistry::new();
        let roster1 = Roster::new(vec![creature(&registry, 1, 10, 10, 0)]);
        let roster2 = Roster::new(vec![creature(&registry, 2, 10, 5, 0)]);

        let mut events = Vec::new();
        let mut selector = first_living_selector();
        let mut sink = |event: &ContestEvent| events.push(event.clone());

        let result = run_contest(roster1, roster2, &mut selector, &mut sink).unwrap();

        assert_eq!(result.rounds.len(), 3);
        assert_eq!(result.rounds[0].winner, Some(1));
        assert_eq!(result.rounds[1].winner, None);
        assert_eq!(result.rounds[2].winner, None);

        let survivor = &result.standings[0].survivors[0];
        assert_eq!(survivor.id, 1);
        assert_eq!(survivor.health, 5);
        assert!(result.standings[1].survivors.is_empty());

        // Rounds 2 and 3 were skipped once roster 2 emptied.
        let skips = events
            .iter()
            .filter(|e| matches!(e, ContestEvent::RoundSkipped { .. }))
            .count();
        assert_eq!(skips, 2);
    }

    #[test]
    fn test_three_full_rounds() {
        let registry = IdRegistry::new();
        let roster1 = Roster::new(vec![
            creature(&registry, 1, 20, 10, 4),
            creature(&registry, 2, 20, 10, 4),
        ]);
        let roster2 = Roster::new(vec![
            creature(&registry, 3, 20, 4, 0),
            creature(&registry, 4, 20, 4, 0),
            creature(&registry, 5, 20, 4, 0),
        ]);

        let mut selector = first_living_selector();
        let mut sink = |_: &ContestEvent| {};
        let result = run_contest(roster1, roster2, &mut selector, &mut sink).unwrap();

        // Coach 1's champion absorbs every hit and wins all three rounds.
        assert_eq!(result.rounds[0].winner, Some(1));
        assert_eq!(result.rounds[1].winner, Some(1));
        assert_eq!(result.rounds[2].winner, Some(1));
        assert_eq!(result.standings[0].survivors.len(), 2);
        assert!(result.standings[1].survivors.is_empty());
    }

    #[test]
    fn test_invalid_selection_fails_closed() {
        let registry = IdRegistry::new();
        let roster1 = Roster::new(vec![creature(&registry, 1, 10, 5, 0)]);
        let roster2 = Roster::new(vec![creature(&registry, 2, 10, 5, 0)]);

        let mut selector = |_coach: CoachId, _roster: &Roster| 999;
        let mut sink = |_: &ContestEvent| {};

        let err = run_contest(roster1, roster2, &mut selector, &mut sink).unwrap_err();
        assert_eq!(err, BattleError::InvalidSelection { coach: 1, id: 999 });
    }

    #[test]
    fn test_champion_reselected_each_round() {
        let registry = IdRegistry::new();
        let roster1 = Roster::new(vec![
            creature(&registry, 1, 20, 10, 0),
            creature(&registry, 2, 20, 10, 0),
        ]);
        let roster2 = Roster::new(vec![
            creature(&registry, 3, 20, 1, 0),
            creature(&registry, 4, 20, 1, 0),
            creature(&registry, 5, 20, 1, 0),
        ]);

        let mut selections = Vec::new();
        let mut selector = |coach: CoachId, roster: &Roster| {
            let id = roster.first_living().map_or(0, Creature::id);
            selections.push((coach, id));
            id
        };
        let mut sink = |_: &ContestEvent| {};

        run_contest(roster1, roster2, &mut selector, &mut sink).unwrap();

        // Two selections per round, three rounds; coach 2 loses one member
        // per round so their champion changes.
        assert_eq!(selections.len(), 6);
        assert_eq!(selections[1], (2, 3));
        assert_eq!(selections[3], (2, 4));
        assert_eq!(selections[5], (2, 5));
    }

    #[test]
    fn test_round_won_event_carries_residual_health() {
        let registry = IdRegistry::new();
        let roster1 = Roster::new(vec![creature(&registry, 1, 10, 10, 0)]);
        let roster2 = Roster::new(vec![creature(&registry, 2, 10, 5, 0)]);

        let mut defeated_health = None;
        let mut selector = first_living_selector();
        let mut sink = |event: &ContestEvent| {
            if let ContestEvent::RoundWon { defeated, .. } = event {
                defeated_health = Some(defeated.health);
            }
        };

        run_contest(roster1, roster2, &mut selector, &mut sink).unwrap();
        assert_eq!(defeated_health, Some(0));
    }
}
