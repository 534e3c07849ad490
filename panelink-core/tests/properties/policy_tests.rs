//! Property-based tests for split policies and finish-behavior predicates
//!
//! These tests verify the coupling rules as universal statements over every
//! policy shape instead of spot-checking individual combinations.

use panelink_core::{FinishBehavior, PairRule, PlaceholderRule, SplitPolicy};
use proptest::prelude::*;

/// Strategy for generating finish behaviors
fn arb_finish_behavior() -> impl Strategy<Value = FinishBehavior> {
    prop_oneof![
        Just(FinishBehavior::Never),
        Just(FinishBehavior::Always),
        Just(FinishBehavior::Adjacent),
    ]
}

/// Strategy for generating pair rules
fn arb_pair_rule() -> impl Strategy<Value = PairRule> {
    (arb_finish_behavior(), arb_finish_behavior())
        .prop_map(|(primary, secondary)| PairRule::new(primary, secondary))
}

/// Strategy for generating split policies of both shapes
fn arb_split_policy() -> impl Strategy<Value = SplitPolicy> {
    prop_oneof![
        arb_pair_rule().prop_map(SplitPolicy::Pair),
        any::<bool>().prop_map(|sticky| SplitPolicy::Placeholder(PlaceholderRule::new(sticky))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every placeholder policy couples both directions, regardless of the
    /// sticky flag.
    #[test]
    fn placeholder_couples_both_directions(sticky in any::<bool>()) {
        let policy = SplitPolicy::Placeholder(PlaceholderRule::new(sticky));
        prop_assert!(policy.should_finish_primary_with_secondary());
        prop_assert!(policy.should_finish_secondary_with_primary());
    }

    /// For pair policies, each should-finish predicate is true exactly when
    /// the behavior configured for that direction is not `Never`.
    #[test]
    fn pair_predicates_track_configured_behavior(rule in arb_pair_rule()) {
        let policy = SplitPolicy::Pair(rule);
        prop_assert_eq!(
            policy.should_finish_primary_with_secondary(),
            rule.finish_primary_with_secondary != FinishBehavior::Never
        );
        prop_assert_eq!(
            policy.should_finish_secondary_with_primary(),
            rule.finish_secondary_with_primary != FinishBehavior::Never
        );
    }

    /// Only `Always` survives the panes being stacked.
    #[test]
    fn stacked_coupling_requires_always(behavior in arb_finish_behavior()) {
        prop_assert_eq!(
            behavior.finishes_when_stacked(),
            behavior == FinishBehavior::Always
        );
    }

    /// Side-by-side coupling holds for everything but `Never`.
    #[test]
    fn adjacent_coupling_excludes_never(behavior in arb_finish_behavior()) {
        prop_assert_eq!(
            behavior.finishes_when_adjacent(),
            behavior != FinishBehavior::Never
        );
    }

    /// A behavior that couples while stacked also couples while adjacent.
    #[test]
    fn stacked_coupling_implies_adjacent_coupling(behavior in arb_finish_behavior()) {
        if behavior.finishes_when_stacked() {
            prop_assert!(behavior.finishes_when_adjacent());
        }
    }

    /// Placeholder accessors report the fixed behaviors: `Never` on the
    /// primary side (no setting exists) while the predicate still says
    /// coupled, and `Always` on the secondary side.
    #[test]
    fn placeholder_accessors_are_fixed(sticky in any::<bool>()) {
        let policy = SplitPolicy::Placeholder(PlaceholderRule::new(sticky));
        prop_assert_eq!(
            policy.finish_primary_with_secondary_behavior(),
            FinishBehavior::Never
        );
        prop_assert!(policy.should_finish_primary_with_secondary());
        prop_assert_eq!(
            policy.finish_secondary_with_primary_behavior(),
            FinishBehavior::Always
        );
    }

    /// Sticky detection reports the placeholder flag and nothing else: it
    /// echoes the flag for placeholders and is false for every pair rule.
    #[test]
    fn sticky_detection_tracks_placeholder_flag(sticky in any::<bool>(), rule in arb_pair_rule()) {
        let placeholder = SplitPolicy::Placeholder(PlaceholderRule::new(sticky));
        prop_assert_eq!(placeholder.is_sticky_placeholder(), sticky);
        prop_assert!(placeholder.is_placeholder());

        let pair = SplitPolicy::Pair(rule);
        prop_assert!(!pair.is_sticky_placeholder());
        prop_assert!(!pair.is_placeholder());
    }

    /// Pair accessors echo the configured rule unchanged.
    #[test]
    fn pair_accessors_echo_configuration(rule in arb_pair_rule()) {
        let policy = SplitPolicy::Pair(rule);
        prop_assert_eq!(
            policy.finish_primary_with_secondary_behavior(),
            rule.finish_primary_with_secondary
        );
        prop_assert_eq!(
            policy.finish_secondary_with_primary_behavior(),
            rule.finish_secondary_with_primary
        );
    }

    /// Any policy survives a JSON round trip unchanged.
    #[test]
    fn policy_serde_round_trip(policy in arb_split_policy()) {
        let json = serde_json::to_string(&policy).expect("policy serializes");
        let back: SplitPolicy = serde_json::from_str(&json).expect("policy deserializes");
        prop_assert_eq!(policy, back);
    }
}
