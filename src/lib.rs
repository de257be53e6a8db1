//! In-memory graphs with pluggable capabilities.
//!
//! - [`graph`] - graph kinds, mutation policies, traversal and subgraphs
//! - [`capability`] - the capability model graphs are composed from

pub use trellis_capability as capability;
pub use trellis_graph as graph;

pub use trellis_graph::{
    Dag, DiGraph, Edge, ErrorKind, Graph, GraphError, MultiGraph, NewVertex, Payload, Result,
    SimpleGraph, VertexId,
};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use trellis_graph::prelude::*;
}
