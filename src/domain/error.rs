//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{GroupId, NodeId};

/// Domain errors represent violations of the catalog tree structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("{child} is already owned by {parent}")]
    AlreadyAttached { child: NodeId, parent: GroupId },

    #[error("adding {child} to {group} would create a cycle")]
    CycleDetected { group: GroupId, child: NodeId },
}

/// Result type for catalog operations.
pub type DomainResult<T> = Result<T, DomainError>;
