//! Integration tests for the split pairing lifecycle
//!
//! These tests drive pairings the way the split manager does: create
//! containers in a registry, pair them under a policy, establish the
//! finish-on-exit obligations, and hand snapshots to the host.

use panelink_core::attributes::{SplitAttributes, SplitKind};
use panelink_core::container::PaneContainer;
use panelink_core::error::PrimaryCoupling;
use panelink_core::pairing::SplitPairing;
use panelink_core::policy::{FinishBehavior, PairRule, PlaceholderRule, SplitPolicy};
use panelink_core::registry::ContainerRegistry;
use panelink_core::types::{ContainerId, MemberId, MinDimensions, TaskId};

/// Creates a registry with two containers in one task. The primary holds
/// `primary_members` running members (the first is returned as the trigger),
/// the secondary holds one.
fn seeded_registry(
    primary_members: usize,
) -> (ContainerRegistry, ContainerId, MemberId, ContainerId) {
    let mut registry = ContainerRegistry::new();
    let task = TaskId::new();
    let primary = registry.create(task);
    let secondary = registry.create(task);

    let trigger = MemberId::new();
    registry
        .add_member(primary, trigger)
        .expect("primary exists");
    for _ in 1..primary_members {
        registry
            .add_member(primary, MemberId::new())
            .expect("primary exists");
    }
    registry
        .add_member(secondary, MemberId::new())
        .expect("secondary exists");

    (registry, primary, trigger, secondary)
}

fn total_obligations(registry: &ContainerRegistry) -> usize {
    registry
        .containers()
        .map(PaneContainer::obligation_count)
        .sum()
}

// ============================================================================
// Pair policy lifecycle
// ============================================================================

#[test]
fn test_adjacent_pair_full_lifecycle() {
    let (mut registry, primary, trigger, secondary) = seeded_registry(1);
    let policy = SplitPolicy::Pair(PairRule::new(
        FinishBehavior::Always,
        FinishBehavior::Never,
    ));

    let mut pairing = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        policy,
        SplitAttributes::new().with_ratio(0.5),
    );

    let outcome = pairing
        .establish_obligations(&mut registry)
        .expect("both containers are live");
    assert_eq!(outcome.primary, PrimaryCoupling::WholeContainer);
    assert!(!outcome.secondary_whole_container);

    // The whole exercise registers exactly one obligation, and it lives on
    // the secondary.
    assert_eq!(total_obligations(&registry), 1, "one obligation registry-wide");
    let secondary_container = registry.get(secondary).expect("secondary exists");
    assert_eq!(secondary_container.containers_to_finish_on_exit(), &[primary]);
    assert!(secondary_container.members_to_finish_on_exit().is_empty());

    // The snapshot mirrors the registry state and the current attributes.
    let snapshot = pairing.to_snapshot(&registry).expect("both containers live");
    assert_eq!(snapshot.primary_stack().container(), primary);
    assert_eq!(snapshot.primary_stack().members(), &[trigger]);
    assert_eq!(snapshot.secondary_stack().container(), secondary);
    assert_eq!(snapshot.attributes().split_kind, SplitKind::Ratio(0.5));

    // A re-layout replaces the attributes wholesale; the next snapshot
    // carries the new value.
    pairing.set_attributes(SplitAttributes::new().with_ratio(0.3));
    let snapshot = pairing.to_snapshot(&registry).expect("both containers live");
    assert_eq!(snapshot.attributes().split_kind, SplitKind::Ratio(0.3));
}

#[test]
fn test_multi_member_primary_keeps_container() {
    let (mut registry, primary, trigger, secondary) = seeded_registry(3);
    let policy = SplitPolicy::Pair(PairRule::new(
        FinishBehavior::Adjacent,
        FinishBehavior::Always,
    ));

    let mut pairing = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        policy,
        SplitAttributes::default(),
    );
    let outcome = pairing
        .establish_obligations(&mut registry)
        .expect("both containers are live");

    // A crowded primary must not be torn down as a whole; only the trigger
    // is coupled to the secondary's exit.
    assert_eq!(outcome.primary, PrimaryCoupling::MemberOnly);
    assert!(outcome.secondary_whole_container);
    assert_eq!(outcome.registered_count(), 2);

    let secondary_container = registry.get(secondary).expect("secondary exists");
    assert_eq!(secondary_container.members_to_finish_on_exit(), &[trigger]);
    assert!(secondary_container.containers_to_finish_on_exit().is_empty());

    let primary_container = registry.get(primary).expect("primary exists");
    assert_eq!(primary_container.containers_to_finish_on_exit(), &[secondary]);
}

#[test]
fn test_repairing_same_containers_does_not_duplicate_obligations() {
    let (mut registry, primary, trigger, secondary) = seeded_registry(1);

    let mut first = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        SplitPolicy::Pair(PairRule::new(
            FinishBehavior::Always,
            FinishBehavior::Never,
        )),
        SplitAttributes::default(),
    );
    first
        .establish_obligations(&mut registry)
        .expect("both containers are live");
    assert_eq!(total_obligations(&registry), 1);

    // The host swaps the policy by creating a fresh pairing over the same
    // containers. Obligations already on the containers are not duplicated.
    let mut second = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        SplitPolicy::Pair(PairRule::new(
            FinishBehavior::Always,
            FinishBehavior::Always,
        )),
        SplitAttributes::default(),
    );
    second
        .establish_obligations(&mut registry)
        .expect("both containers are live");

    assert_eq!(
        registry
            .get(secondary)
            .expect("secondary exists")
            .containers_to_finish_on_exit(),
        &[primary]
    );
    assert_eq!(
        registry
            .get(primary)
            .expect("primary exists")
            .containers_to_finish_on_exit(),
        &[secondary]
    );
    assert_eq!(total_obligations(&registry), 2);
}

// ============================================================================
// Placeholder policy lifecycle
// ============================================================================

#[test]
fn test_placeholder_pairing_couples_both_sides() {
    let (mut registry, primary, trigger, placeholder) = seeded_registry(1);
    let policy = SplitPolicy::Placeholder(PlaceholderRule::new(true));

    let mut pairing = SplitPairing::new(
        &registry,
        primary,
        trigger,
        placeholder,
        policy,
        SplitAttributes::default(),
    );
    assert!(pairing.is_placeholder_pairing());
    assert!(pairing.policy().is_sticky_placeholder());

    let outcome = pairing
        .establish_obligations(&mut registry)
        .expect("both containers are live");
    assert_eq!(outcome.registered_count(), 2);

    // Placeholders follow their primary and vice versa, regardless of the
    // sticky flag.
    assert_eq!(
        registry
            .get(placeholder)
            .expect("placeholder exists")
            .containers_to_finish_on_exit(),
        &[primary]
    );
    assert_eq!(
        registry
            .get(primary)
            .expect("primary exists")
            .containers_to_finish_on_exit(),
        &[placeholder]
    );
}

#[test]
fn test_min_dimensions_flow_into_pair_query() {
    let (mut registry, primary, trigger, secondary) = seeded_registry(1);
    registry
        .get_mut(secondary)
        .expect("secondary exists")
        .set_min_dimensions(Some(MinDimensions::new(600, 400)));

    let pairing = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        SplitPolicy::Placeholder(PlaceholderRule::new(false)),
        SplitAttributes::default(),
    );

    let (primary_min, secondary_min) = pairing
        .min_dimensions_pair(&registry)
        .expect("both containers are live");
    assert_eq!(primary_min, None);
    assert_eq!(secondary_min, Some(MinDimensions::new(600, 400)));
    assert_eq!(
        pairing.task(&registry).expect("primary is live"),
        registry.get(primary).expect("primary exists").task()
    );
}

// ============================================================================
// Host-facing serialization
// ============================================================================

#[test]
fn test_snapshot_serializes_for_host() {
    let (mut registry, primary, trigger, secondary) = seeded_registry(2);
    let mut pairing = SplitPairing::new(
        &registry,
        primary,
        trigger,
        secondary,
        SplitPolicy::Pair(PairRule::default()),
        SplitAttributes::new().with_ratio(0.25),
    );
    pairing
        .establish_obligations(&mut registry)
        .expect("both containers are live");

    let snapshot = pairing.to_snapshot(&registry).expect("both containers live");
    let value = serde_json::to_value(&snapshot).expect("snapshot serializes");

    assert_eq!(
        value["primary_stack"]["container"],
        serde_json::to_value(primary).expect("id serializes")
    );
    assert_eq!(
        value["primary_stack"]["members"]
            .as_array()
            .expect("members array")
            .len(),
        2
    );
    assert_eq!(
        value["secondary_stack"]["container"],
        serde_json::to_value(secondary).expect("id serializes")
    );
    assert_eq!(value["attributes"]["split_kind"]["ratio"], 0.25);
    assert_eq!(value["attributes"]["layout_direction"], "locale");
}
