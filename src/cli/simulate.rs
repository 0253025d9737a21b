//! Simulate command implementation: a contest with automatic selection.

use std::path::Path;

use arena::contest::{ContestEvent, build_roster, load_roster};
use arena::{CoachId, Creature, IdRegistry, Roster, run_contest};

use super::output::{TranscriptPrinter, format_json};
use super::{CliError, OutputFormat};

/// Execute the simulate command.
///
/// Champions are auto-selected: each coach fields their first living
/// creature in roster order, every round.
///
/// # Errors
///
/// Returns an error if a roster file is unreadable or malformed, or if the
/// result cannot be serialized.
pub(crate) fn execute(
    roster1: &Path,
    roster2: &Path,
    format: OutputFormat,
) -> Result<(), CliError> {
    let registry = IdRegistry::new();
    let coach1 = build_roster(load_roster(roster1)?, &registry)?;
    let coach2 = build_roster(load_roster(roster2)?, &registry)?;

    let mut selector =
        |_coach: CoachId, roster: &Roster| roster.first_living().map_or(0, Creature::id);

    match format {
        OutputFormat::Text => {
            let mut sink = TranscriptPrinter;
            run_contest(coach1, coach2, &mut selector, &mut sink)?;
        }
        OutputFormat::Json => {
            let mut sink = |_: &ContestEvent| {};
            let result = run_contest(coach1, coach2, &mut selector, &mut sink)?;
            let json = format_json(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
