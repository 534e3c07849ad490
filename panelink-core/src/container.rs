//! Display containers and their finish-on-exit bookkeeping
//!
//! A container hosts an ordered stack of running members and records the
//! teardown obligations other parts of the system register against its
//! exit. The container itself never executes teardown; the manager reads
//! the obligation lists when the container exits and acts on them.

use crate::snapshot::MemberStack;
use crate::types::{ContainerId, MemberId, MinDimensions, TaskId};

/// A display container: an ordered stack of members inside one task.
///
/// Containers are owned by a [`ContainerRegistry`](crate::ContainerRegistry)
/// and addressed by [`ContainerId`] everywhere else. Two kinds of exit
/// obligations can be registered against a container:
///
/// - whole containers that must finish when this container exits
/// - single members that must finish when this container exits
///
/// Both lists are deduplicated; registering the same obligation twice is
/// a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneContainer {
    id: ContainerId,
    task: TaskId,
    members: Vec<MemberId>,
    min_dimensions: Option<MinDimensions>,
    containers_to_finish_on_exit: Vec<ContainerId>,
    members_to_finish_on_exit: Vec<MemberId>,
}

impl PaneContainer {
    /// Creates an empty container owned by `task`.
    ///
    /// Typically called through [`ContainerRegistry::create`](crate::ContainerRegistry::create),
    /// which also stores the container.
    #[must_use]
    pub fn new(task: TaskId) -> Self {
        Self {
            id: ContainerId::new(),
            task,
            members: Vec::new(),
            min_dimensions: None,
            containers_to_finish_on_exit: Vec::new(),
            members_to_finish_on_exit: Vec::new(),
        }
    }

    /// This container's ID.
    #[must_use]
    pub const fn id(&self) -> ContainerId {
        self.id
    }

    /// The task container owning this container.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    // ======================== Member management ========================

    /// Number of running members.
    #[must_use]
    pub fn running_member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if `member` is running in this container.
    #[must_use]
    pub fn contains_member(&self, member: MemberId) -> bool {
        self.members.contains(&member)
    }

    /// Members in stacking order, bottom first.
    #[must_use]
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Adds a member on top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the member is already running in this container.
    pub fn add_member(&mut self, member: MemberId) {
        assert!(
            !self.members.contains(&member),
            "member already running in container {}: {member}",
            self.id
        );
        self.members.push(member);
    }

    /// Removes a member from the stack.
    ///
    /// Returns true if the member was present.
    pub fn remove_member(&mut self, member: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|existing| *existing != member);
        self.members.len() != before
    }

    // ==================== Finish-on-exit obligations ====================

    /// Records that `other` must be torn down when this container exits.
    ///
    /// Duplicate registrations are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `other` is this container itself.
    pub fn register_container_to_finish_on_exit(&mut self, other: ContainerId) {
        assert!(
            other != self.id,
            "container {other} cannot finish on its own exit"
        );
        if !self.containers_to_finish_on_exit.contains(&other) {
            self.containers_to_finish_on_exit.push(other);
        }
    }

    /// Records that a single member must be torn down when this container
    /// exits.
    ///
    /// Duplicate registrations are ignored.
    pub fn register_member_to_finish_on_exit(&mut self, member: MemberId) {
        if !self.members_to_finish_on_exit.contains(&member) {
            self.members_to_finish_on_exit.push(member);
        }
    }

    /// Containers registered to finish when this container exits.
    #[must_use]
    pub fn containers_to_finish_on_exit(&self) -> &[ContainerId] {
        &self.containers_to_finish_on_exit
    }

    /// Members registered to finish when this container exits.
    #[must_use]
    pub fn members_to_finish_on_exit(&self) -> &[MemberId] {
        &self.members_to_finish_on_exit
    }

    /// Total number of registered obligations.
    #[must_use]
    pub fn obligation_count(&self) -> usize {
        self.containers_to_finish_on_exit.len() + self.members_to_finish_on_exit.len()
    }

    /// Returns true if any obligation is registered on this container.
    #[must_use]
    pub fn has_obligations(&self) -> bool {
        self.obligation_count() > 0
    }

    // ========================= Layout and views =========================

    /// Minimum size this container requires, if constrained.
    #[must_use]
    pub const fn min_dimensions(&self) -> Option<MinDimensions> {
        self.min_dimensions
    }

    /// Sets or clears the minimum-size constraint.
    pub fn set_min_dimensions(&mut self, dimensions: Option<MinDimensions>) {
        self.min_dimensions = dimensions;
    }

    /// The externally visible view of this container's stack.
    #[must_use]
    pub fn to_stack_view(&self) -> MemberStack {
        MemberStack::new(self.id, self.members.clone())
    }
}
