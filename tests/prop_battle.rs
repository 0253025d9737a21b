//! Property-based tests for the battle core.
//!
//! These verify the damage math, liveness predicates and duel behavior.
//! Run with: cargo test --release prop_battle

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use arena::{Creature, DuelOutcome, IdRegistry, Roster, WeaponType, resolve_exchange, run_duel};

fn creature(registry: &IdRegistry, id: u32, health: i32, attack: u32, defense: u32) -> Creature {
    Creature::new(registry, id, format!("c{id}"), WeaponType::Punch, health, attack, defense)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// A hit fully covered by defense leaves health untouched.
    #[test]
    fn prop_absorbed_hit_changes_nothing(
        health in -1000i32..1000,
        defense in 0u32..10_000,
        slack in 0u32..10_000
    ) {
        let points = defense - defense.min(slack);
        let registry = IdRegistry::new();
        let mut c = creature(&registry, 1, health, 1, defense);

        prop_assert!(!c.apply_damage(points));
        prop_assert_eq!(c.health(), health);
    }

    /// A piercing hit reduces health by exactly the uncovered remainder.
    #[test]
    fn prop_piercing_hit_is_exact(
        health in -1000i32..1000,
        defense in 0u32..10_000,
        excess in 1u32..10_000
    ) {
        let points = defense + excess;
        let registry = IdRegistry::new();
        let mut c = creature(&registry, 1, health, 1, defense);

        prop_assert!(c.apply_damage(points));
        prop_assert_eq!(c.health(), health - i32::try_from(excess).unwrap());
    }

    /// Liveness is the strict comparison `health > 0`, negatives included.
    #[test]
    fn prop_is_alive_iff_positive_health(health in -10_000i32..10_000) {
        let registry = IdRegistry::new();
        let c = creature(&registry, 1, health, 1, 0);
        prop_assert_eq!(c.is_alive(), health > 0);
    }

    /// A roster is all-defeated exactly when every member is at or below
    /// zero health.
    #[test]
    fn prop_all_defeated_matches_membership(healths in prop::collection::vec(-50i32..50, 0..8)) {
        let registry = IdRegistry::new();
        let members: Vec<_> = healths
            .iter()
            .enumerate()
            .map(|(i, &h)| creature(&registry, u32::try_from(i).unwrap(), h, 1, 0))
            .collect();
        let roster = Roster::new(members);

        let expected = healths.iter().all(|&h| h <= 0);
        prop_assert_eq!(roster.all_defeated(), expected);
    }

    /// One exchange applies both defenses against pre-exchange ratings and
    /// reports raw ratings as damage.
    #[test]
    fn prop_exchange_simultaneity(
        health_a in 1i32..1000,
        health_b in 1i32..1000,
        attack_a in 1u32..500,
        attack_b in 1u32..500,
        defense_a in 0u32..500,
        defense_b in 0u32..500
    ) {
        let registry = IdRegistry::new();
        let mut a = creature(&registry, 1, health_a, attack_a, defense_a);
        let mut b = creature(&registry, 2, health_b, attack_b, defense_b);

        let exchange = resolve_exchange(&mut a, &mut b);

        prop_assert_eq!(exchange.first.damage, attack_a);
        prop_assert_eq!(exchange.second.damage, attack_b);

        let expected_b = if attack_a > defense_b {
            health_b - i32::try_from(attack_a - defense_b).unwrap()
        } else {
            health_b
        };
        let expected_a = if attack_b > defense_a {
            health_a - i32::try_from(attack_b - defense_a).unwrap()
        } else {
            health_a
        };
        prop_assert_eq!(b.health(), expected_b);
        prop_assert_eq!(a.health(), expected_a);
        prop_assert_eq!(exchange.first.landed, attack_a > defense_b);
        prop_assert_eq!(exchange.second.landed, attack_b > defense_a);
    }

    /// A duel terminates whenever the first creature out-damages the
    /// second's defense, and re-running it from identical stats produces
    /// the identical outcome and exchange count.
    #[test]
    fn prop_duel_terminates_and_is_deterministic(
        health_a in 1i32..500,
        health_b in 1i32..500,
        attack_a in 1u32..100,
        attack_b in 1u32..100,
        defense_a in 0u32..100,
        defense_b in 0u32..100
    ) {
        // Guarantee progress: a pierces b every exchange.
        let attack_a = attack_a + defense_b;

        let registry = IdRegistry::new();
        let mut a1 = creature(&registry, 1, health_a, attack_a, defense_a);
        let mut b1 = creature(&registry, 2, health_b, attack_b, defense_b);
        let mut count1 = 0u32;
        let outcome1 = run_duel(&mut a1, &mut b1, |_| count1 += 1);

        let mut a2 = creature(&registry, 3, health_a, attack_a, defense_a);
        let mut b2 = creature(&registry, 4, health_b, attack_b, defense_b);
        let mut count2 = 0u32;
        let outcome2 = run_duel(&mut a2, &mut b2, |_| count2 += 1);

        prop_assert_eq!(outcome1, outcome2);
        prop_assert_eq!(count1, count2);
        prop_assert_eq!(a1.health(), a2.health());
        prop_assert_eq!(b1.health(), b2.health());

        // The loser is genuinely down; the duel never ends early.
        match outcome1 {
            DuelOutcome::FirstDefeated => prop_assert!(!a1.is_alive()),
            DuelOutcome::SecondDefeated => prop_assert!(!b1.is_alive()),
        }
    }

    /// Strictly decreasing health: no exchange ever heals either side.
    #[test]
    fn prop_exchange_never_heals(
        health_a in 1i32..1000,
        health_b in 1i32..1000,
        attack_a in 1u32..500,
        attack_b in 1u32..500,
        defense_a in 0u32..500,
        defense_b in 0u32..500
    ) {
        let registry = IdRegistry::new();
        let mut a = creature(&registry, 1, health_a, attack_a, defense_a);
        let mut b = creature(&registry, 2, health_b, attack_b, defense_b);

        resolve_exchange(&mut a, &mut b);

        prop_assert!(a.health() <= health_a);
        prop_assert!(b.health() <= health_b);
    }
}
