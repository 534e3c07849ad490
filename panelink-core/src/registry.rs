//! Externally owned registry of live containers
//!
//! The registry owns every [`PaneContainer`] in a task hierarchy; the rest
//! of the system holds [`ContainerId`] handles and borrows containers from
//! here. Pairings in particular never own containers; they are handed the
//! registry for exactly the calls that need it.

use std::collections::HashMap;

use crate::container::PaneContainer;
use crate::error::PairingError;
use crate::types::{ContainerId, MemberId, TaskId};

/// Owns all live containers, keyed by ID.
///
/// # Example
///
/// ```
/// use panelink_core::{ContainerRegistry, MemberId, TaskId};
///
/// let mut registry = ContainerRegistry::new();
/// let container = registry.create(TaskId::new());
/// registry.add_member(container, MemberId::new()).unwrap();
/// assert_eq!(registry.get(container).unwrap().running_member_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    /// Map of container IDs to their containers
    containers: HashMap<ContainerId, PaneContainer>,
}

impl ContainerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container in `task` and returns its ID.
    pub fn create(&mut self, task: TaskId) -> ContainerId {
        let container = PaneContainer::new(task);
        let id = container.id();
        tracing::debug!(container = %id, task = %task, "Container created");
        self.containers.insert(id, container);
        id
    }

    /// Gets a container by ID.
    #[must_use]
    pub fn get(&self, id: ContainerId) -> Option<&PaneContainer> {
        self.containers.get(&id)
    }

    /// Gets a mutable reference to a container by ID.
    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut PaneContainer> {
        self.containers.get_mut(&id)
    }

    /// Removes a container, returning it if it existed.
    ///
    /// Dissolving any pairing that references the container is the caller's
    /// responsibility; the registry does not track pairings.
    pub fn remove(&mut self, id: ContainerId) -> Option<PaneContainer> {
        let removed = self.containers.remove(&id);
        if removed.is_some() {
            tracing::debug!(container = %id, "Container removed");
        }
        removed
    }

    /// Returns true if the registry holds `id`.
    #[must_use]
    pub fn contains(&self, id: ContainerId) -> bool {
        self.containers.contains_key(&id)
    }

    /// Returns the number of live containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns true if no containers are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Returns all live container IDs.
    #[must_use]
    pub fn container_ids(&self) -> Vec<ContainerId> {
        self.containers.keys().copied().collect()
    }

    /// Iterates over all live containers.
    pub fn containers(&self) -> impl Iterator<Item = &PaneContainer> {
        self.containers.values()
    }

    /// Adds a running member to a container.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if the registry does not
    /// hold `container`.
    ///
    /// # Panics
    ///
    /// Panics if the member is already running in the container.
    pub fn add_member(
        &mut self,
        container: ContainerId,
        member: MemberId,
    ) -> Result<(), PairingError> {
        let target = self
            .containers
            .get_mut(&container)
            .ok_or(PairingError::ContainerNotFound(container))?;
        target.add_member(member);
        Ok(())
    }

    /// Removes a running member from a container.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::ContainerNotFound`] if the registry does not
    /// hold `container`, or [`PairingError::MemberNotFound`] if the container
    /// does not hold `member`.
    pub fn remove_member(
        &mut self,
        container: ContainerId,
        member: MemberId,
    ) -> Result<(), PairingError> {
        let target = self
            .containers
            .get_mut(&container)
            .ok_or(PairingError::ContainerNotFound(container))?;
        if target.remove_member(member) {
            Ok(())
        } else {
            Err(PairingError::MemberNotFound { container, member })
        }
    }
}
