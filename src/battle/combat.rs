//! Single-exchange combat resolution.
//!
//! One exchange is simultaneous: both attack ratings are read before either
//! defense is resolved, so neither side's defense this exchange is affected
//! by whether it would fall to the other's hit.

use crate::battle::{Creature, CreatureId};

/// One directed hit within an exchange.
///
/// `damage` is always the attacker's RAW attack rating, even when the
/// defender absorbed the hit entirely; the post-defense remainder is never
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// The attacking creature.
    pub attacker: CreatureId,
    /// The defending creature.
    pub defender: CreatureId,
    /// Raw attack rating carried by the hit.
    pub damage: u32,
    /// Whether the hit pierced the defender's defense.
    pub landed: bool,
}

/// Both directions of one simultaneous exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// Hit from the first creature against the second.
    pub first: Strike,
    /// Hit from the second creature against the first.
    pub second: Strike,
}

/// Resolve exactly one mutual exchange between two creatures.
///
/// Both attack ratings are captured before any health mutation; then each
/// creature's defense is resolved against the other's pre-exchange rating.
/// No loop: callers drive repetition.
pub fn resolve_exchange(first: &mut Creature, second: &mut Creature) -> Exchange {
    let first_rating = first.attack_rating();
    let second_rating = second.attack_rating();

    let landed_on_second = first.attack(second);
    let landed_on_first = second.attack(first);

    Exchange {
        first: Strike {
            attacker: first.id(),
            defender: second.id(),
            damage: first_rating,
            landed: landed_on_second,
        },
        second: Strike {
            attacker: second.id(),
            defender: first.id(),
            damage: second_rating,
            landed: landed_on_first,
        },
    }
}

/// Kani formal verification proofs.
///
/// These prove arithmetic safety of the damage reduction used by
/// `Creature::apply_damage`. Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    /// Prove the uncovered-remainder subtraction never underflows.
    ///
    /// `apply_damage` computes `points - defense` only under the guard
    /// `points > defense`.
    #[kani::proof]
    fn prove_reduction_subtraction_safe() {
        let points: u32 = kani::any();
        let defense: u32 = kani::any();

        if points > defense {
            let reduction = points - defense;
            assert!(reduction >= 1);
            assert!(reduction <= points);
        }
    }

    /// Prove the health update never increases health.
    #[kani::proof]
    fn prove_health_never_increases() {
        let health: i32 = kani::any();
        let reduction: i32 = kani::any();

        if reduction >= 0 {
            let updated = health.saturating_sub(reduction);
            assert!(updated <= health);
        }
    }
}
