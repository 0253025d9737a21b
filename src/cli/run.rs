//! Run command implementation: an interactive contest.

use std::io::{self, BufRead, Write};
use std::path::Path;

use arena::contest::{build_roster, load_roster};
use arena::{ChampionSelector, CoachId, Creature, CreatureId, IdRegistry, Roster, run_contest};

use super::CliError;
use super::output::{RULE, TranscriptPrinter};

/// Champion selector that prompts on stdin.
///
/// Prints the coach's living roster, then asks for an id until a living
/// member is named. The retry loop lives here, in the shell; the core only
/// ever sees a valid selection. If stdin closes, the first living member is
/// fielded so a piped session still finishes.
#[derive(Debug, Clone, Copy, Default)]
struct ConsoleSelector;

impl ChampionSelector for ConsoleSelector {
    fn choose(&mut self, coach: CoachId, roster: &Roster) -> CreatureId {
        println!("{RULE}");
        println!("Coach {coach}, select your champion.");
        println!("{RULE}");
        for creature in roster.iter().filter(|c| c.is_alive()) {
            println!("{creature}");
        }
        println!("{RULE}");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("Select the ID of the champion: ");
            let _ = io::stdout().flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let id = roster.first_living().map_or(0, Creature::id);
                    println!("(input closed; fielding creature {id})");
                    return id;
                }
                Ok(_) => {}
            }

            match line.trim().parse::<CreatureId>() {
                Ok(id) if roster.get(id).is_some_and(Creature::is_alive) => return id,
                _ => println!("Invalid champion ID selected."),
            }
        }
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if a roster file is unreadable or malformed, or if the
/// contest fails.
pub(crate) fn execute(roster1: &Path, roster2: &Path) -> Result<(), CliError> {
    let registry = IdRegistry::new();
    let coach1 = build_roster(load_roster(roster1)?, &registry)?;
    let coach2 = build_roster(load_roster(roster2)?, &registry)?;

    println!("{RULE}");
    println!("The contest starts...");

    let mut selector = ConsoleSelector;
    let mut sink = TranscriptPrinter;
    run_contest(coach1, coach2, &mut selector, &mut sink)?;

    Ok(())
}
