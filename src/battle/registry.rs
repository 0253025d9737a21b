//! Live creature-id registry.
//!
//! Every creature registers its id here at construction and releases it when
//! it is dropped. The registry makes id collisions detectable at the moment
//! the second creature is built rather than at some later lookup.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::battle::CreatureId;
use crate::error::BattleError;

/// Shared registry of ids belonging to live creatures.
///
/// Handles are cheap to clone and all clones observe the same id set. The
/// internal lock only exists to keep the handle trivially shareable; the
/// battle core itself is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: Arc<Mutex<HashSet<CreatureId>>>,
}

impl IdRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an id, returning a tag that releases it on drop.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::DuplicateIdentity`] if the id is already live.
    pub fn register(&self, id: CreatureId) -> Result<IdTag, BattleError> {
        let mut ids = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
        if !ids.insert(id) {
            return Err(BattleError::DuplicateIdentity(id));
        }
        Ok(IdTag {
            id,
            ids: Arc::clone(&self.ids),
        })
    }

    /// Check whether an id is currently live.
    #[must_use]
    pub fn is_registered(&self, id: CreatureId) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }

    /// Number of live ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no ids are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped claim on a creature id.
///
/// Owned by the creature carrying the id; dropping the tag removes the id
/// from the registry, making it re-usable.
#[derive(Debug)]
pub struct IdTag {
    id: CreatureId,
    ids: Arc<Mutex<HashSet<CreatureId>>>,
}

impl IdTag {
    /// The id this tag claims.
    #[must_use]
    pub fn id(&self) -> CreatureId {
        self.id
    }
}

impl Drop for IdTag {
    fn drop(&mut self) {
        let mut ids = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
        ids.remove(&self.id);
    }
}
