//! Roster definition files.
//!
//! A roster file holds one creature per line, six comma-separated fields:
//!
//! ```text
//! id,name,weapon,health,attack,defense
//! 1,Ivysaur,HEADBUTT,100,8,9
//! ```
//!
//! Blank lines are skipped and fields are trimmed. Weapon tags are matched
//! case-insensitively against the closed weapon set. Health and attack must
//! be positive: a creature that starts defeated cannot be fielded, and a
//! zero attack rating could make a duel run forever.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::battle::{Creature, CreatureId, IdRegistry, Roster, WeaponType};
use crate::error::BattleError;

/// Parsed roster-file row, not yet registered as a live creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    /// Creature id.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Carried weapon.
    pub weapon: WeaponType,
    /// Starting health points (positive).
    pub health: i32,
    /// Attack rating (positive).
    pub attack: u32,
    /// Defense rating.
    pub defense: u32,
}

/// Errors produced while reading a roster file.
#[derive(Debug)]
pub enum RosterFileError {
    /// The file could not be read.
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A line did not have exactly six fields.
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        found: usize,
    },
    /// A numeric field did not parse.
    BadNumber {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// The weapon tag is not in the closed weapon set.
    UnknownWeapon {
        /// 1-based line number.
        line: usize,
        /// The offending tag.
        value: String,
    },
    /// A stat that must be positive was zero or negative.
    BadStat {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}

impl fmt::Display for RosterFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterFileError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            RosterFileError::FieldCount { line, found } => {
                write!(f, "line {line}: expected 6 fields, found {found}")
            }
            RosterFileError::BadNumber { line, field, value } => {
                write!(f, "line {line}: {field} is not an integer: {value:?}")
            }
            RosterFileError::UnknownWeapon { line, value } => {
                write!(f, "line {line}: unknown weapon tag {value:?}")
            }
            RosterFileError::BadStat { line, field, value } => {
                write!(f, "line {line}: {field} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for RosterFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterFileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse roster-file text into records.
///
/// # Errors
///
/// Returns the first malformed line as a [`RosterFileError`].
pub fn parse_roster(text: &str) -> Result<Vec<CreatureRecord>, RosterFileError> {
    let mut records = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(RosterFileError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let id = parse_number::<CreatureId>(line, "id", fields[0])?;
        let name = fields[1].to_string();
        let weapon = WeaponType::from_tag(fields[2]).ok_or_else(|| {
            RosterFileError::UnknownWeapon {
                line,
                value: fields[2].to_string(),
            }
        })?;
        let health = parse_number::<i32>(line, "health", fields[3])?;
        let attack = parse_number::<u32>(line, "attack", fields[4])?;
        let defense = parse_number::<u32>(line, "defense", fields[5])?;

        if health <= 0 {
            return Err(RosterFileError::BadStat {
                line,
                field: "health",
                value: i64::from(health),
            });
        }
        if attack == 0 {
            return Err(RosterFileError::BadStat {
                line,
                field: "attack",
                value: 0,
            });
        }

        records.push(CreatureRecord {
            id,
            name,
            weapon,
            health,
            attack,
            defense,
        });
    }

    Ok(records)
}

/// Read and parse a roster file.
///
/// # Errors
///
/// Returns [`RosterFileError::Io`] if the file cannot be read, or the first
/// parse error otherwise.
pub fn load_roster(path: &Path) -> Result<Vec<CreatureRecord>, RosterFileError> {
    let text = fs::read_to_string(path).map_err(|source| RosterFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&text)
}

/// Construct a roster from records, registering every id.
///
/// The registry is shared across both coaches, so an id collision between
/// the two roster files surfaces here.
///
/// # Errors
///
/// Returns [`BattleError::DuplicateIdentity`] on an id collision.
pub fn build_roster(
    records: Vec<CreatureRecord>,
    registry: &IdRegistry,
) -> Result<Roster, BattleError> {
    let mut members = Vec::with_capacity(records.len());
    for record in records {
        members.push(Creature::new(
            registry,
            record.id,
            record.name,
            record.weapon,
            record.health,
            record.attack,
            record.defense,
        )?);
    }
    Ok(Roster::new(members))
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, RosterFileError> {
    value.parse().map_err(|_| RosterFileError::BadNumber {
        line,
        field,
        value: value.to_string(),
    })
}
