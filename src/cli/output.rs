//! Output formatting utilities for CLI.

use arena::contest::{ContestEvent, ContestResult};
use arena::{CoachStanding, EventSink};

/// Horizontal rule used throughout the transcript.
pub(super) const RULE: &str =
    "------------------------------------------------------------------";

/// Event sink that prints a human-readable transcript as events arrive.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TranscriptPrinter;

impl EventSink for TranscriptPrinter {
    fn on_event(&mut self, event: &ContestEvent) {
        match event {
            ContestEvent::ChampionSelected { coach, champion, .. } => {
                println!("{RULE}");
                println!("Coach {coach} has selected {champion}");
            }
            ContestEvent::ExchangeResolved { exchange, .. } => {
                for strike in [&exchange.first, &exchange.second] {
                    let verdict = if strike.landed { "hits" } else { "is absorbed" };
                    println!(
                        "Creature {} attacks creature {} with {} damage ({verdict}).",
                        strike.attacker, strike.defender, strike.damage
                    );
                }
            }
            ContestEvent::RoundWon { round, coach, defeated } => {
                println!("{RULE}");
                println!("Coach {coach} wins round {round}! Defeated: {defeated}");
            }
            ContestEvent::RoundSkipped { round } => {
                println!("{RULE}");
                println!("Round {round} skipped: a coach has no creatures left.");
            }
            ContestEvent::ContestEnded { standings } => {
                println!("{RULE}");
                println!("The contest has ended.");
                for standing in standings {
                    print_standing(standing);
                }
            }
        }
    }
}

/// Print one coach's final standing.
pub(super) fn print_standing(standing: &CoachStanding) {
    println!("{RULE}");
    println!("Coach {} survivors:", standing.coach);
    if standing.survivors.is_empty() {
        println!("  (none)");
    }
    for card in &standing.survivors {
        println!("  {card} (health points: {})", card.health);
    }
}

/// Serialize a contest result as pretty JSON.
pub(super) fn format_json(result: &ContestResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
