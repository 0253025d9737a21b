//! Creature state and damage resolution.

use std::fmt;

use serde::Serialize;

use crate::battle::registry::{IdRegistry, IdTag};
use crate::error::BattleError;

/// Unique identifier for a creature.
pub type CreatureId = u32;

/// Weapon carried by a creature.
///
/// Display-only: the weapon does not affect combat math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeaponType {
    /// A punch.
    Punch,
    /// A kick.
    Kick,
    /// A headbutt.
    Headbutt,
    /// An elbow strike.
    Elbow,
}

impl WeaponType {
    /// The uppercase tag used in roster files and display output.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            WeaponType::Punch => "PUNCH",
            WeaponType::Kick => "KICK",
            WeaponType::Headbutt => "HEADBUTT",
            WeaponType::Elbow => "ELBOW",
        }
    }

    /// Parse a tag, case-insensitively. Returns `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "PUNCH" => Some(WeaponType::Punch),
            "KICK" => Some(WeaponType::Kick),
            "HEADBUTT" => Some(WeaponType::Headbutt),
            "ELBOW" => Some(WeaponType::Elbow),
            _ => None,
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A battle creature.
///
/// Identity, weapon and ratings are immutable after construction; health is
/// mutated only through [`Creature::apply_damage`]. Health is deliberately
/// NOT clamped at zero: it may go negative, and liveness is always the
/// strict comparison `health > 0`.
///
/// Not `Clone`: each creature owns its id registration, and a clone would
/// collide with the original in the registry.
#[derive(Debug)]
pub struct Creature {
    tag: IdTag,
    name: String,
    weapon: WeaponType,
    health: i32,
    attack: u32,
    defense: u32,
}

impl Creature {
    /// Construct a creature and claim its id in the registry.
    ///
    /// Health is expected to start positive; the roster-file loader enforces
    /// this for external input.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::DuplicateIdentity`] if the id is already live.
    pub fn new(
        registry: &IdRegistry,
        id: CreatureId,
        name: impl Into<String>,
        weapon: WeaponType,
        health: i32,
        attack: u32,
        defense: u32,
    ) -> Result<Self, BattleError> {
        let tag = registry.register(id)?;
        Ok(Self {
            tag,
            name: name.into(),
            weapon,
            health,
            attack,
            defense,
        })
    }

    /// The creature's id.
    #[must_use]
    pub fn id(&self) -> CreatureId {
        self.tag.id()
    }

    /// The creature's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weapon this creature carries.
    #[must_use]
    pub fn weapon(&self) -> WeaponType {
        self.weapon
    }

    /// Current health points. May be negative after a finishing blow.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Attack rating.
    #[must_use]
    pub fn attack_rating(&self) -> u32 {
        self.attack
    }

    /// Defense rating.
    #[must_use]
    pub fn defense_rating(&self) -> u32 {
        self.defense
    }

    /// Whether the creature is still fighting fit.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Resolve an incoming hit against this creature's defense.
    ///
    /// If the defense rating fully covers the incoming points the hit is
    /// absorbed: health is untouched and `false` is returned. Otherwise
    /// health drops by exactly the uncovered remainder and `true` is
    /// returned. This is the only operation that mutates health.
    pub fn apply_damage(&mut self, points: u32) -> bool {
        if self.defense >= points {
            return false;
        }
        let reduction = i32::try_from(points - self.defense).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(reduction);
        true
    }

    /// Strike another creature with this creature's attack rating.
    ///
    /// Pure delegation to the target's [`Creature::apply_damage`]; returns
    /// whether the hit landed.
    pub fn attack(&self, target: &mut Creature) -> bool {
        target.apply_damage(self.attack)
    }

    /// Snapshot of the creature for events and standings.
    #[must_use]
    pub fn card(&self) -> CreatureCard {
        CreatureCard {
            id: self.id(),
            name: self.name.clone(),
            weapon: self.weapon,
            health: self.health,
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Creature {} {} [{}] hp {}",
            self.id(),
            self.name,
            self.weapon,
            self.health
        )
    }
}

/// Owned snapshot of a creature's display state.
///
/// Captures id, name, weapon and the health at the moment the card was
/// taken. Used wherever an event must outlive the creature it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureCard {
    /// Creature id.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Carried weapon.
    pub weapon: WeaponType,
    /// Health points when the card was taken.
    pub health: i32,
}

impl fmt::Display for CreatureCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Creature {} {} [{}] hp {}",
            self.id, self.name, self.weapon, self.health
        )
    }
}
