//! Coach rosters.

use crate::battle::{Creature, CreatureCard, CreatureId};
use crate::error::BattleError;

/// Ordered collection of creatures owned by one coach.
///
/// Membership only ever shrinks mid-match: the match controller removes a
/// creature once it loses a duel.
#[derive(Debug, Default)]
pub struct Roster {
    members: Vec<Creature>,
}

impl Roster {
    /// Build a roster from an ordered sequence of creatures.
    #[must_use]
    pub fn new(members: Vec<Creature>) -> Self {
        Self { members }
    }

    /// Whether every member is down.
    ///
    /// Vacuously true for an empty roster: a coach with nothing left to
    /// field has no fight in them.
    #[must_use]
    pub fn all_defeated(&self) -> bool {
        self.members.iter().all(|c| !c.is_alive())
    }

    /// Look up a member by id.
    #[must_use]
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.members.iter().find(|c| c.id() == id)
    }

    /// Look up a member by id, mutably.
    pub fn get_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.members.iter_mut().find(|c| c.id() == id)
    }

    /// First member that is still alive, in roster order.
    #[must_use]
    pub fn first_living(&self) -> Option<&Creature> {
        self.members.iter().find(|c| c.is_alive())
    }

    /// Remove a member, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::NotInRoster`] if no member has the id.
    pub fn remove(&mut self, id: CreatureId) -> Result<Creature, BattleError> {
        let index = self
            .members
            .iter()
            .position(|c| c.id() == id)
            .ok_or(BattleError::NotInRoster(id))?;
        Ok(self.members.remove(index))
    }

    /// Iterate members in roster order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.members.iter()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Snapshot cards for every member, in roster order.
    #[must_use]
    pub fn cards(&self) -> Vec<CreatureCard> {
        self.members.iter().map(Creature::card).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
