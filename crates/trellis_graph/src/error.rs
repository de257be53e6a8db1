//! Graph errors.

use trellis_capability::{CapabilityError, Scope};

use crate::id::{EdgeId, GraphId, VertexId};

/// Errors returned by graph operations.
///
/// Every error is detected before any state is mutated, so a failed operation
/// leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No vertex with this id exists in the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    /// No vertex is registered under this name.
    #[error("no vertex named '{0}'")]
    NameNotFound(String),

    /// No edge with this id exists in the graph.
    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// An edge was walked from a vertex it does not touch.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint {
        /// The edge being walked.
        edge: EdgeId,
        /// The vertex the walk started from.
        vertex: VertexId,
    },

    /// The vertex name is already registered to another vertex.
    #[error("vertex name '{0}' is already registered")]
    DuplicateName(String),

    /// An entity of one graph instance was used with another.
    #[error("{entity} belongs to {found}, not {expected}")]
    ForeignGraph {
        /// Display form of the offending vertex or edge.
        entity: String,
        /// The graph the operation ran on.
        expected: GraphId,
        /// The graph the entity belongs to.
        found: GraphId,
    },

    /// The graph does not admit loops.
    #[error("loops are not allowed (at vertex {0})")]
    Loop(VertexId),

    /// The graph does not admit parallel edges.
    #[error("an edge between {0} and {1} already exists")]
    MultiEdge(VertexId, VertexId),

    /// The edge would close a directed cycle.
    #[error("edge {tail} -> {head} would create a cycle")]
    Cyclic {
        /// The proposed tail.
        tail: VertexId,
        /// The proposed head.
        head: VertexId,
    },

    /// The operation is provided by a capability this graph was not built with.
    #[error("{capability} is required for this {scope} operation")]
    MissingCapability {
        /// Short name of the required capability.
        capability: &'static str,
        /// The scope the operation was invoked at.
        scope: Scope,
    },

    /// Capability composition or configuration failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// Coarse classification of [`GraphError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A lookup by id or name failed, or an edge was walked from a non-endpoint.
    NotFound,
    /// A vertex name collided with an existing one.
    DuplicateName,
    /// Entities from different graph instances were mixed.
    GraphMembership,
    /// A loop was rejected.
    Loop,
    /// A parallel edge was rejected.
    MultiEdge,
    /// A cycle-closing edge was rejected.
    Cyclic,
    /// No capability recognized a configuration option.
    UnknownConfiguration,
    /// A capability rejected a configuration value.
    InvalidConfiguration,
    /// The same capability was listed twice.
    DuplicateCapability,
    /// A capability failed to initialize.
    CapabilityInitialization,
    /// A capability-backed operation was invoked without the capability.
    MissingCapability,
}

impl GraphError {
    /// Returns the error's classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound(_)
            | GraphError::NameNotFound(_)
            | GraphError::EdgeNotFound(_)
            | GraphError::NotAnEndpoint { .. } => ErrorKind::NotFound,
            GraphError::DuplicateName(_) => ErrorKind::DuplicateName,
            GraphError::ForeignGraph { .. } => ErrorKind::GraphMembership,
            GraphError::Loop(_) => ErrorKind::Loop,
            GraphError::MultiEdge(..) => ErrorKind::MultiEdge,
            GraphError::Cyclic { .. } => ErrorKind::Cyclic,
            GraphError::MissingCapability { .. } => ErrorKind::MissingCapability,
            GraphError::Capability(err) => match err {
                CapabilityError::UnknownConfiguration { .. } => ErrorKind::UnknownConfiguration,
                CapabilityError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
                CapabilityError::Duplicate(_) => ErrorKind::DuplicateCapability,
                CapabilityError::Initialization { .. } => ErrorKind::CapabilityInitialization,
            },
        }
    }

    /// Returns true for errors produced by an edge admission policy.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Loop | ErrorKind::MultiEdge | ErrorKind::Cyclic
        )
    }

    pub(crate) fn foreign(entity: impl ToString, expected: GraphId, found: GraphId) -> Self {
        GraphError::ForeignGraph {
            entity: entity.to_string(),
            expected,
            found,
        }
    }
}

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
