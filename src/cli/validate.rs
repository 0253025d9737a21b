//! Validate command implementation.

use std::path::Path;

use arena::IdRegistry;
use arena::contest::{build_roster, load_roster};

use super::CliError;

/// Execute the validate command.
///
/// Parses the roster file, checks for id collisions within it, and prints
/// each record.
///
/// # Errors
///
/// Returns an error describing the first problem found.
pub(crate) fn execute(roster: &Path) -> Result<(), CliError> {
    let records = load_roster(roster)?;
    println!("{}: {} creature(s)", roster.display(), records.len());

    for record in &records {
        println!(
            "  id {} {} [{}] hp {} atk {} def {}",
            record.id, record.name, record.weapon, record.health, record.attack, record.defense
        );
    }

    // A fresh registry surfaces duplicate ids within this one file.
    let registry = IdRegistry::new();
    build_roster(records, &registry)?;

    println!("Roster is valid.");
    Ok(())
}
