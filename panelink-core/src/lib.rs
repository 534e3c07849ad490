//! `PaneLink` Core Library
//!
//! This crate provides the pairing model for the `PaneLink` split manager:
//! tracking which two pane containers form a split, what policy couples their
//! lifecycles, and which finish-on-exit obligations that policy implies.
//!
//! # Crate Structure
//!
//! - [`types`] - Identifier newtypes and size constraints
//! - [`policy`] - Split policies and finish-behavior predicates
//! - [`attributes`] - Layout attributes (ratio, hinge, direction)
//! - [`container`] - Pane containers with members and obligations
//! - [`registry`] - Ownership of containers, keyed by ID
//! - [`pairing`] - The split pairing record and obligation registration
//! - [`snapshot`] - Public split descriptors handed to the host
//! - [`error`] - Error and outcome types for pairing operations
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod attributes;
pub mod container;
pub mod error;
pub mod pairing;
pub mod policy;
pub mod registry;
pub mod snapshot;
pub mod tracing;
pub mod types;

// =============================================================================
// Convenience re-exports
//
// These flat re-exports exist for embedding hosts and for the integration and
// property tests. New code should prefer the modular paths (e.g.
// `panelink_core::policy::SplitPolicy`) over the flat namespace
// (`panelink_core::SplitPolicy`).
// =============================================================================

pub use attributes::{
    DEFAULT_SPLIT_RATIO, LayoutDirection, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, SplitAttributes,
    SplitKind,
};
pub use container::PaneContainer;
pub use error::{ObligationOutcome, PairingError, PrimaryCoupling};
pub use pairing::SplitPairing;
pub use policy::{FinishBehavior, PairRule, PlaceholderRule, SplitPolicy};
pub use registry::ContainerRegistry;
pub use snapshot::{MemberStack, SplitSnapshot};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, get_tracing_config,
    init_tracing, is_tracing_initialized,
};
pub use types::{ContainerId, MemberId, MinDimensions, TaskId};
