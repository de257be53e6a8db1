//! In-memory graphs with pluggable capabilities.
//!
//! `trellis_graph` provides four graph kinds behind one orchestrator type:
//!
//! - [`MultiGraph`] - undirected, loops and parallel edges allowed
//! - [`SimpleGraph`] - undirected, no loops or parallel edges
//! - [`DiGraph`] - directed, loops and parallel edges allowed
//! - [`Dag`] - directed and acyclic
//!
//! # Core Concepts
//!
//! - [`Graph`] - vertices, edges and the capabilities an instance was built with
//! - [`Vertex`] / [`Payload`] - vertex records with optional names and user data
//! - [`Edge`] - tail to head connections, oriented on directed kinds
//! - [`EdgePolicy`] - the admission rule each kind applies before inserting an edge
//! - [`BreadthFirst`] - the lazy walk behind every reachability query
//! - [`capability`] - optional operation families such as ancestry and components
//!
//! # Example
//!
//! ```
//! use trellis_graph::prelude::*;
//!
//! let mut graph = Dag::<()>::new();
//! for name in ["core", "parser", "cli"] {
//!     graph.add_vertex(name).unwrap();
//! }
//! graph.add_edge("core", "parser").unwrap();
//! graph.add_edge("parser", "cli").unwrap();
//!
//! // Closing a cycle is refused and leaves the graph untouched.
//! let err = graph.add_edge("cli", "core").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Cyclic);
//! assert_eq!(graph.edge_count(), 2);
//!
//! let order = graph.topological_ordering();
//! assert_eq!(order[0], graph.fetch("core").unwrap());
//! assert!(graph.is_ancestor("cli", "core").unwrap());
//! ```

/// Graph builder with capabilities, options and initial contents.
pub mod builder;

/// Built-in capabilities.
pub mod capability;

/// Edge records and storage.
pub mod edge;

/// Graph errors and their kinds.
pub mod error;

/// The graph orchestrator and its kind aliases.
pub mod graph;

/// Graph, vertex and edge identities.
pub mod id;

/// Reachability order and topological sorting for DAGs.
pub mod order;

/// Graph kinds and edge admission policies.
pub mod policy;

/// Breadth-first traversal.
pub mod traversal;

/// Vertex records and payloads.
pub mod vertex;

mod directed;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::builder::GraphBuilder;
    pub use crate::capability::{Ancestry, Connectedness};
    pub use crate::edge::Edge;
    pub use crate::error::{ErrorKind, GraphError};
    pub use crate::graph::{Dag, DiGraph, Graph, MultiGraph, SimpleGraph};
    pub use crate::id::{EdgeId, GraphId, VertexId, VertexKey};
    pub use crate::order::PartialOrder;
    pub use crate::policy::{
        Acyclic, Directed, DirectedKind, EdgePolicy, GraphKind, Multi, Simple, Variant,
    };
    pub use crate::traversal::{BreadthFirst, Direction, Neighbors};
    pub use crate::vertex::{NewVertex, Payload, Vertex};
    pub use trellis_capability::{Capability, CapabilityError, CapabilitySet, Configured, Scope};
}

// Re-export key types at crate root for convenience
pub use builder::GraphBuilder;
pub use edge::Edge;
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{Dag, DiGraph, Graph, MultiGraph, SimpleGraph};
pub use id::{EdgeId, GraphId, VertexId, VertexKey};
pub use order::PartialOrder;
pub use policy::{EdgePolicy, Variant};
pub use traversal::{BreadthFirst, Direction, Neighbors};
pub use vertex::{NewVertex, Payload, Vertex};
