//! Error and outcome types for pairing operations
//!
//! This module defines the error type returned by registry-backed pairing
//! operations and the outcome summary produced by obligation registration.

use crate::types::{ContainerId, MemberId};

/// Errors that can occur during registry-backed pairing operations.
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    /// The registry no longer holds the referenced container.
    #[error("container not found: {0}")]
    ContainerNotFound(ContainerId),

    /// The container does not hold the referenced member.
    #[error("member not found: {member} in container {container}")]
    MemberNotFound {
        /// Container that was searched.
        container: ContainerId,
        /// Member that was missing.
        member: MemberId,
    },
}

/// How the primary side was coupled to the secondary's exit.
///
/// Recorded on the secondary container during obligation registration.
/// Whole-container coupling applies only when the primary holds exactly one
/// running member and that member is the pairing's triggering member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryCoupling {
    /// The policy never finishes the primary with the secondary.
    Uncoupled,
    /// The entire primary container finishes when the secondary exits.
    WholeContainer,
    /// Only the triggering member finishes when the secondary exits.
    MemberOnly,
}

/// Outcome of a pairing's obligation registration.
///
/// Summarizes what was recorded on the two containers. The containers'
/// finish-on-exit lists remain the source of truth; this value exists so
/// the caller can log or branch without re-reading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObligationOutcome {
    /// Coupling recorded on the secondary for the primary side.
    pub primary: PrimaryCoupling,
    /// Whether the whole secondary container was recorded on the primary.
    pub secondary_whole_container: bool,
}

impl ObligationOutcome {
    /// Returns true if nothing was registered on either container.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.primary, PrimaryCoupling::Uncoupled) && !self.secondary_whole_container
    }

    /// Number of obligations registered across both containers.
    #[must_use]
    pub const fn registered_count(&self) -> usize {
        let primary = match self.primary {
            PrimaryCoupling::Uncoupled => 0,
            PrimaryCoupling::WholeContainer | PrimaryCoupling::MemberOnly => 1,
        };
        let secondary = if self.secondary_whole_container { 1 } else { 0 };
        primary + secondary
    }
}
