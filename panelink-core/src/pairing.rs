//! The split pairing record: two containers coupled under one policy
//!
//! A [`SplitPairing`] is created by the owning manager whenever two
//! containers enter a split. It is pure bookkeeping: it never owns the
//! containers (those live in the [`ContainerRegistry`]) and never executes
//! teardown. Its one side effect is [`SplitPairing::establish_obligations`],
//! which translates the policy into finish-on-exit registrations on the two
//! containers. The manager destroys the pairing when either container goes
//! away or the containers are re-paired.
//!
//! # Obligation registration
//!
//! Registration evaluates two independent decisions against the containers'
//! state at registration time:
//!
//! 1. If the policy finishes the primary with the secondary, the secondary
//!    records an obligation for the primary side. When the primary holds
//!    exactly one running member and that member is the triggering member,
//!    the whole primary container is registered; otherwise only the
//!    triggering member is.
//! 2. If the policy finishes the secondary with the primary, the primary
//!    records the whole secondary container. This direction never narrows
//!    to a single member.

use std::fmt;

use crate::attributes::SplitAttributes;
use crate::container::PaneContainer;
use crate::error::{ObligationOutcome, PairingError, PrimaryCoupling};
use crate::policy::SplitPolicy;
use crate::registry::ContainerRegistry;
use crate::snapshot::SplitSnapshot;
use crate::types::{ContainerId, MemberId, MinDimensions, TaskId};

/// Couples a primary and a secondary container under a split policy.
///
/// The pairing stores container IDs, never containers; every operation that
/// reads or mutates container state borrows the caller's registry.
///
/// # Example
///
/// ```
/// use panelink_core::{
///     ContainerRegistry, FinishBehavior, MemberId, PairRule, SplitAttributes,
///     SplitPairing, SplitPolicy, TaskId,
/// };
///
/// let mut registry = ContainerRegistry::new();
/// let task = TaskId::new();
/// let primary = registry.create(task);
/// let secondary = registry.create(task);
/// let trigger = MemberId::new();
/// registry.add_member(primary, trigger).unwrap();
///
/// let policy = SplitPolicy::Pair(PairRule::new(
///     FinishBehavior::Always,
///     FinishBehavior::Never,
/// ));
/// let mut pairing = SplitPairing::new(
///     &registry,
///     primary,
///     trigger,
///     secondary,
///     policy,
///     SplitAttributes::default(),
/// );
///
/// let outcome = pairing.establish_obligations(&mut registry).unwrap();
/// assert_eq!(outcome.registered_count(), 1);
/// assert_eq!(
///     registry.get(secondary).unwrap().containers_to_finish_on_exit(),
///     &[primary],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SplitPairing {
    primary: ContainerId,
    triggering_member: MemberId,
    secondary: ContainerId,
    policy: SplitPolicy,
    attributes: SplitAttributes,
    obligations_established: bool,
}

impl SplitPairing {
    /// Creates a pairing over two live containers.
    ///
    /// The registry is used for validation only; no obligations are
    /// registered until [`establish_obligations`](Self::establish_obligations)
    /// runs.
    ///
    /// # Panics
    ///
    /// Panics if `primary` and `secondary` are the same container, if either
    /// container is not in the registry, if the containers belong to
    /// different tasks, or if the primary does not hold `triggering_member`.
    #[must_use]
    pub fn new(
        registry: &ContainerRegistry,
        primary: ContainerId,
        triggering_member: MemberId,
        secondary: ContainerId,
        policy: SplitPolicy,
        initial_attributes: SplitAttributes,
    ) -> Self {
        assert!(
            primary != secondary,
            "cannot pair container {primary} with itself"
        );
        let Some(primary_container) = registry.get(primary) else {
            panic!("primary container not in registry: {primary}");
        };
        let Some(secondary_container) = registry.get(secondary) else {
            panic!("secondary container not in registry: {secondary}");
        };
        assert_eq!(
            primary_container.task(),
            secondary_container.task(),
            "paired containers must share a task"
        );
        assert!(
            primary_container.contains_member(triggering_member),
            "triggering member {triggering_member} is not running in primary container {primary}"
        );

        tracing::debug!(
            primary = %primary,
            secondary = %secondary,
            policy = %policy,
            "Split pairing created"
        );

        Self {
            primary,
            triggering_member,
            secondary,
            policy,
            attributes: initial_attributes,
            obligations_established: false,
        }
    }

    /// Computes and registers the finish-on-exit obligations this split
    /// implies, as described in the [module docs](self).
    ///
    /// The decisions read the containers' state at call time, so the member
    /// population may have changed since construction. Nothing is registered
    /// until both containers have been found in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if either container has
    /// left the registry. No obligation is registered in that case and the
    /// pairing stays unestablished.
    ///
    /// # Panics
    ///
    /// Panics if obligations were already established for this pairing.
    pub fn establish_obligations(
        &mut self,
        registry: &mut ContainerRegistry,
    ) -> Result<ObligationOutcome, PairingError> {
        assert!(
            !self.obligations_established,
            "obligations already established for split {}/{}",
            self.primary, self.secondary
        );

        let (primary_member_count, trigger_running) = match registry.get(self.primary) {
            Some(container) => (
                container.running_member_count(),
                container.contains_member(self.triggering_member),
            ),
            None => return Err(PairingError::ContainerNotFound(self.primary)),
        };
        if !registry.contains(self.secondary) {
            return Err(PairingError::ContainerNotFound(self.secondary));
        }

        let mut outcome = ObligationOutcome {
            primary: PrimaryCoupling::Uncoupled,
            secondary_whole_container: false,
        };

        // Both ids were validated above; the if-lets below only re-borrow.
        if self.policy.should_finish_primary_with_secondary() {
            let whole_container = primary_member_count == 1 && trigger_running;
            if let Some(secondary) = registry.get_mut(self.secondary) {
                if whole_container {
                    secondary.register_container_to_finish_on_exit(self.primary);
                    outcome.primary = PrimaryCoupling::WholeContainer;
                    tracing::debug!(
                        primary = %self.primary,
                        secondary = %self.secondary,
                        "Whole primary container finishes on secondary exit"
                    );
                } else {
                    secondary.register_member_to_finish_on_exit(self.triggering_member);
                    outcome.primary = PrimaryCoupling::MemberOnly;
                    tracing::debug!(
                        member = %self.triggering_member,
                        secondary = %self.secondary,
                        "Triggering member finishes on secondary exit"
                    );
                }
            }
        }

        if self.policy.should_finish_secondary_with_primary() {
            if let Some(primary) = registry.get_mut(self.primary) {
                primary.register_container_to_finish_on_exit(self.secondary);
                outcome.secondary_whole_container = true;
                tracing::debug!(
                    primary = %self.primary,
                    secondary = %self.secondary,
                    "Whole secondary container finishes on primary exit"
                );
            }
        }

        self.obligations_established = true;
        Ok(outcome)
    }

    /// The primary container's ID.
    #[must_use]
    pub const fn primary(&self) -> ContainerId {
        self.primary
    }

    /// The secondary container's ID.
    #[must_use]
    pub const fn secondary(&self) -> ContainerId {
        self.secondary
    }

    /// The member whose launch created this split.
    #[must_use]
    pub const fn triggering_member(&self) -> MemberId {
        self.triggering_member
    }

    /// The policy the containers were paired under.
    #[must_use]
    pub const fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// The attributes the split was last laid out with.
    #[must_use]
    pub const fn attributes(&self) -> SplitAttributes {
        self.attributes
    }

    /// Whether [`establish_obligations`](Self::establish_obligations) has
    /// run for this pairing.
    #[must_use]
    pub const fn obligations_established(&self) -> bool {
        self.obligations_established
    }

    /// Whether this pairing couples a primary with a placeholder.
    #[must_use]
    pub const fn is_placeholder_pairing(&self) -> bool {
        self.policy.is_placeholder()
    }

    /// Replaces the split attributes wholesale.
    ///
    /// No validation happens here; the manager computes attributes upstream
    /// on every re-layout (resize, fold-state change) and pushes the result
    /// down.
    pub fn set_attributes(&mut self, attributes: SplitAttributes) {
        tracing::trace!(
            primary = %self.primary,
            secondary = %self.secondary,
            attributes = %attributes,
            "Split attributes replaced"
        );
        self.attributes = attributes;
    }

    /// The two containers' minimum-size constraints, primary first.
    ///
    /// Either side may be unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if a referenced container
    /// has left the registry.
    pub fn min_dimensions_pair(
        &self,
        registry: &ContainerRegistry,
    ) -> Result<(Option<MinDimensions>, Option<MinDimensions>), PairingError> {
        let primary = registry
            .get(self.primary)
            .ok_or(PairingError::ContainerNotFound(self.primary))?;
        let secondary = registry
            .get(self.secondary)
            .ok_or(PairingError::ContainerNotFound(self.secondary))?;
        Ok((primary.min_dimensions(), secondary.min_dimensions()))
    }

    /// The task container hosting both sides of this split.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if the primary container
    /// has left the registry.
    pub fn task(&self, registry: &ContainerRegistry) -> Result<TaskId, PairingError> {
        registry
            .get(self.primary)
            .map(PaneContainer::task)
            .ok_or(PairingError::ContainerNotFound(self.primary))
    }

    /// Builds the public descriptor for this split: both containers' stack
    /// views plus the current attributes. Obligation bookkeeping is not
    /// part of the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if a referenced container
    /// has left the registry.
    pub fn to_snapshot(&self, registry: &ContainerRegistry) -> Result<SplitSnapshot, PairingError> {
        let primary = registry
            .get(self.primary)
            .ok_or(PairingError::ContainerNotFound(self.primary))?;
        let secondary = registry
            .get(self.secondary)
            .ok_or(PairingError::ContainerNotFound(self.secondary))?;
        Ok(SplitSnapshot::new(
            primary.to_stack_view(),
            secondary.to_stack_view(),
            self.attributes,
        ))
    }
}

impl fmt::Display for SplitPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SplitPairing {{ primary: {}, secondary: {}, policy: {}, attributes: {} }}",
            self.primary, self.secondary, self.policy, self.attributes
        )
    }
}
