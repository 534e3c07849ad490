//! Public descriptors reported to split observers
//!
//! Observers of the split system (window decor, accessibility, host shells)
//! receive these value types instead of live containers. They carry the
//! externally visible stack contents and the current attributes, and none
//! of the finish-on-exit bookkeeping.

use serde::{Deserialize, Serialize};

use crate::attributes::SplitAttributes;
use crate::types::{ContainerId, MemberId};

/// Externally visible view of one container's member stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStack {
    container: ContainerId,
    members: Vec<MemberId>,
}

impl MemberStack {
    /// Creates a stack view for a container.
    #[must_use]
    pub const fn new(container: ContainerId, members: Vec<MemberId>) -> Self {
        Self { container, members }
    }

    /// The container this stack belongs to.
    #[must_use]
    pub const fn container(&self) -> ContainerId {
        self.container
    }

    /// Members in stacking order, bottom first.
    #[must_use]
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Returns true if the container holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Public descriptor of one split: both stacks plus the current attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSnapshot {
    primary_stack: MemberStack,
    secondary_stack: MemberStack,
    attributes: SplitAttributes,
}

impl SplitSnapshot {
    /// Creates a snapshot from the two stack views and attributes.
    #[must_use]
    pub const fn new(
        primary_stack: MemberStack,
        secondary_stack: MemberStack,
        attributes: SplitAttributes,
    ) -> Self {
        Self {
            primary_stack,
            secondary_stack,
            attributes,
        }
    }

    /// The primary container's stack view.
    #[must_use]
    pub const fn primary_stack(&self) -> &MemberStack {
        &self.primary_stack
    }

    /// The secondary container's stack view.
    #[must_use]
    pub const fn secondary_stack(&self) -> &MemberStack {
        &self.secondary_stack
    }

    /// The attributes the split was last laid out with.
    #[must_use]
    pub const fn attributes(&self) -> SplitAttributes {
        self.attributes
    }
}
