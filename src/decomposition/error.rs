//! Decomposition error types.

use thiserror::Error;

use super::component::ComponentId;

/// Result type for decomposition operations.
pub type Result<T> = std::result::Result<T, DecompositionError>;

/// Errors raised when the dependency graph breaks an internal invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    /// The dependency graph contains a cycle through this component.
    #[error("Cyclic dependency detected at component {id}")]
    CyclicDependency { id: ComponentId },

    /// A dependency refers to a component that does not exist.
    #[error("Unknown component: {0}")]
    UnknownComponent(ComponentId),
}
