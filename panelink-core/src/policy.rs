//! Split policies and finish-behavior predicates
//!
//! A split policy decides how tightly the two sides of a split are coupled:
//! whether finishing one side also finishes the other, and under which
//! presentation states. The predicates in this module are pure functions of
//! the policy value alone, so the manager can evaluate them without any
//! pairing at hand.
//!
//! # Policy shapes
//!
//! - [`SplitPolicy::Pair`] couples two independently launched panes. Each
//!   direction of the coupling carries its own [`FinishBehavior`].
//! - [`SplitPolicy::Placeholder`] couples a primary pane with a placeholder
//!   pane opened next to it. Placeholder coupling is implicit: both sides
//!   always follow each other, and the only configuration is whether the
//!   placeholder is sticky.
//!
//! # Example
//!
//! ```
//! use panelink_core::policy::{FinishBehavior, PairRule, SplitPolicy};
//!
//! let policy = SplitPolicy::Pair(PairRule::new(
//!     FinishBehavior::Adjacent,
//!     FinishBehavior::Always,
//! ));
//! assert!(policy.should_finish_primary_with_secondary());
//! assert!(!policy.finish_primary_with_secondary_behavior().finishes_when_stacked());
//! assert!(policy.finish_primary_with_secondary_behavior().finishes_when_adjacent());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// When an associated container finishes together with its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishBehavior {
    /// Never finish the associated container.
    Never,
    /// Always finish the associated container.
    Always,
    /// Finish the associated container only while both panes are shown
    /// side by side.
    Adjacent,
}

impl FinishBehavior {
    /// Whether the associated container finishes while the panes are
    /// stacked (one covering the other).
    ///
    /// Only [`FinishBehavior::Always`] survives stacking; adjacency-scoped
    /// coupling is suspended while the counterpart is not visible.
    #[must_use]
    pub const fn finishes_when_stacked(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never | Self::Adjacent => false,
        }
    }

    /// Whether the associated container finishes while the panes are shown
    /// side by side.
    #[must_use]
    pub const fn finishes_when_adjacent(self) -> bool {
        match self {
            Self::Always | Self::Adjacent => true,
            Self::Never => false,
        }
    }
}

impl fmt::Display for FinishBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Always => write!(f, "always"),
            Self::Adjacent => write!(f, "adjacent"),
        }
    }
}

/// Rule for a split of two independently launched panes.
///
/// The two directions are configured separately: what happens to the
/// primary when the secondary exits, and what happens to the secondary
/// when the primary exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairRule {
    /// Behavior applied to the primary when the secondary exits.
    pub finish_primary_with_secondary: FinishBehavior,
    /// Behavior applied to the secondary when the primary exits.
    pub finish_secondary_with_primary: FinishBehavior,
}

impl PairRule {
    /// Creates a pair rule with the given coupling behaviors.
    #[must_use]
    pub const fn new(
        finish_primary_with_secondary: FinishBehavior,
        finish_secondary_with_primary: FinishBehavior,
    ) -> Self {
        Self {
            finish_primary_with_secondary,
            finish_secondary_with_primary,
        }
    }
}

impl Default for PairRule {
    /// The common default: the secondary follows the primary, the primary
    /// outlives the secondary.
    fn default() -> Self {
        Self::new(FinishBehavior::Never, FinishBehavior::Always)
    }
}

/// Rule for a primary pane paired with a placeholder.
///
/// A placeholder is opened by the system next to a primary pane when no
/// real secondary content exists yet. Its lifecycle coupling is fixed (see
/// [`SplitPolicy`]); the rule only configures stickiness. A sticky
/// placeholder stays on top after the split collapses to one pane instead
/// of being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlaceholderRule {
    /// Whether the placeholder survives the split collapsing.
    pub sticky: bool,
}

impl PlaceholderRule {
    /// Creates a placeholder rule.
    #[must_use]
    pub const fn new(sticky: bool) -> Self {
        Self { sticky }
    }
}

/// Policy under which two containers were put into a split.
///
/// This is a closed set: every predicate below matches exhaustively over
/// the variants so that adding a policy shape forces a revisit of each
/// coupling decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Two independently launched panes with configured coupling.
    Pair(PairRule),
    /// A primary pane with a system-opened placeholder.
    Placeholder(PlaceholderRule),
}

impl SplitPolicy {
    /// Whether the primary side must finish when the secondary exits.
    ///
    /// True for every placeholder policy, and for a pair policy whose
    /// primary-side behavior is anything other than
    /// [`FinishBehavior::Never`].
    #[must_use]
    pub const fn should_finish_primary_with_secondary(self) -> bool {
        match self {
            Self::Placeholder(_) => true,
            Self::Pair(rule) => match rule.finish_primary_with_secondary {
                FinishBehavior::Never => false,
                FinishBehavior::Always | FinishBehavior::Adjacent => true,
            },
        }
    }

    /// Whether the secondary side must finish when the primary exits.
    ///
    /// True for every placeholder policy, and for a pair policy whose
    /// secondary-side behavior is anything other than
    /// [`FinishBehavior::Never`].
    #[must_use]
    pub const fn should_finish_secondary_with_primary(self) -> bool {
        match self {
            Self::Placeholder(_) => true,
            Self::Pair(rule) => match rule.finish_secondary_with_primary {
                FinishBehavior::Never => false,
                FinishBehavior::Always | FinishBehavior::Adjacent => true,
            },
        }
    }

    /// The configured primary-side behavior.
    ///
    /// Placeholder rules carry no primary-side behavior setting, so they
    /// report [`FinishBehavior::Never`] here even though
    /// [`should_finish_primary_with_secondary`](Self::should_finish_primary_with_secondary)
    /// treats them as coupled. Callers deciding primary teardown must use
    /// the boolean predicate; this accessor only surfaces a configured
    /// value where one exists.
    #[must_use]
    pub const fn finish_primary_with_secondary_behavior(self) -> FinishBehavior {
        match self {
            Self::Pair(rule) => rule.finish_primary_with_secondary,
            Self::Placeholder(_) => FinishBehavior::Never,
        }
    }

    /// The effective secondary-side behavior.
    ///
    /// A placeholder always follows its primary, so placeholder policies
    /// report [`FinishBehavior::Always`] unconditionally; pair policies
    /// report the configured value.
    #[must_use]
    pub const fn finish_secondary_with_primary_behavior(self) -> FinishBehavior {
        match self {
            Self::Pair(rule) => rule.finish_secondary_with_primary,
            Self::Placeholder(_) => FinishBehavior::Always,
        }
    }

    /// Whether this is a placeholder policy.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        match self {
            Self::Placeholder(_) => true,
            Self::Pair(_) => false,
        }
    }

    /// Whether this is a placeholder policy with the sticky flag set.
    #[must_use]
    pub const fn is_sticky_placeholder(self) -> bool {
        match self {
            Self::Placeholder(rule) => rule.sticky,
            Self::Pair(_) => false,
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(rule) => write!(
                f,
                "pair({}/{})",
                rule.finish_primary_with_secondary, rule.finish_secondary_with_primary
            ),
            Self::Placeholder(rule) => {
                if rule.sticky {
                    write!(f, "placeholder(sticky)")
                } else {
                    write!(f, "placeholder")
                }
            }
        }
    }
}
