//! Graph kinds and their edge admission policies.
//!
//! A graph's kind is a type parameter, so operations that only make sense for
//! directed graphs (in/out degree, successors) or for DAGs (topological
//! ordering) exist only on those types. The kind also fixes the policy every
//! proposed edge is checked against before it is stored.

use core::fmt;

use trellis_capability::CapabilitySet;

use crate::capability::{Ancestry, Connectedness};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::id::VertexId;
use crate::traversal::Direction;
use crate::vertex::Payload;

mod sealed {
    pub trait Sealed {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant / EdgePolicy
// ─────────────────────────────────────────────────────────────────────────────

/// The four graph variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Undirected, loops and parallel edges allowed.
    Multigraph,
    /// Undirected, no loops, no parallel edges.
    SimpleGraph,
    /// Directed, loops and parallel edges allowed.
    Digraph,
    /// Directed, no directed cycles.
    Dag,
}

impl Variant {
    /// Returns true for directed variants.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        matches!(self, Variant::Digraph | Variant::Dag)
    }

    /// Returns the policy edges of this variant are admitted under.
    #[must_use]
    pub fn policy(&self) -> EdgePolicy {
        match self {
            Variant::Multigraph | Variant::Digraph => EdgePolicy::Unconstrained,
            Variant::SimpleGraph => EdgePolicy::Simple,
            Variant::Dag => EdgePolicy::Acyclic,
        }
    }

    /// Returns the lowercase variant name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Multigraph => "multigraph",
            Variant::SimpleGraph => "simple graph",
            Variant::Digraph => "digraph",
            Variant::Dag => "dag",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a proposed edge must satisfy before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Every edge is admitted.
    Unconstrained,
    /// Loops and parallel edges are rejected.
    Simple,
    /// Edges closing a directed cycle (loops included) are rejected.
    Acyclic,
}

impl EdgePolicy {
    /// Checks a proposed edge `tail -> head` against the graph's current state.
    ///
    /// Runs before any mutation, so a rejection leaves the graph untouched.
    pub(crate) fn admit<K: GraphKind, P: Payload>(
        self,
        graph: &Graph<K, P>,
        tail: VertexId,
        head: VertexId,
    ) -> Result<()> {
        match self {
            EdgePolicy::Unconstrained => Ok(()),
            EdgePolicy::Simple => {
                if tail == head {
                    return Err(GraphError::Loop(tail));
                }
                if graph
                    .edge_store()
                    .incident(tail)
                    .any(|edge| edge.connects(tail, head))
                {
                    return Err(GraphError::MultiEdge(tail, head));
                }
                Ok(())
            }
            EdgePolicy::Acyclic => {
                // The walk from head yields head first, so a loop is caught too.
                if graph
                    .walk(head, Direction::Successors)
                    .any(|vertex| vertex == tail)
                {
                    return Err(GraphError::Cyclic { tail, head });
                }
                Ok(())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Type-level graph variant.
///
/// Implemented by [`Multi`], [`Simple`], [`Directed`] and [`Acyclic`] only.
pub trait GraphKind: sealed::Sealed + Send + Sync + 'static {
    /// The variant this kind stands for.
    const VARIANT: Variant;

    /// Capabilities a graph of this kind is built with when none are given.
    fn default_capabilities() -> CapabilitySet;
}

/// Marker for kinds whose edges are oriented.
pub trait DirectedKind: GraphKind {}

/// Undirected graph admitting loops and parallel edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multi;

/// Undirected graph without loops or parallel edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

/// Directed graph admitting loops and parallel edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Directed graph without directed cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acyclic;

impl sealed::Sealed for Multi {}
impl sealed::Sealed for Simple {}
impl sealed::Sealed for Directed {}
impl sealed::Sealed for Acyclic {}

impl GraphKind for Multi {
    const VARIANT: Variant = Variant::Multigraph;

    fn default_capabilities() -> CapabilitySet {
        CapabilitySet::new().add(Connectedness)
    }
}

impl GraphKind for Simple {
    const VARIANT: Variant = Variant::SimpleGraph;

    fn default_capabilities() -> CapabilitySet {
        CapabilitySet::new().add(Connectedness)
    }
}

impl GraphKind for Directed {
    const VARIANT: Variant = Variant::Digraph;

    fn default_capabilities() -> CapabilitySet {
        CapabilitySet::new().add(Ancestry)
    }
}

impl GraphKind for Acyclic {
    const VARIANT: Variant = Variant::Dag;

    fn default_capabilities() -> CapabilitySet {
        CapabilitySet::new().add(Ancestry)
    }
}

impl DirectedKind for Directed {}
impl DirectedKind for Acyclic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_policies() {
        assert_eq!(Multi::VARIANT.policy(), EdgePolicy::Unconstrained);
        assert_eq!(Simple::VARIANT.policy(), EdgePolicy::Simple);
        assert_eq!(Directed::VARIANT.policy(), EdgePolicy::Unconstrained);
        assert_eq!(Acyclic::VARIANT.policy(), EdgePolicy::Acyclic);
    }

    #[test]
    fn direction_per_variant() {
        assert!(!Variant::Multigraph.is_directed());
        assert!(!Variant::SimpleGraph.is_directed());
        assert!(Variant::Digraph.is_directed());
        assert!(Variant::Dag.is_directed());
    }

    #[test]
    fn default_capabilities_per_direction() {
        assert!(Multi::default_capabilities().contains::<Connectedness>());
        assert!(Simple::default_capabilities().contains::<Connectedness>());
        assert!(Directed::default_capabilities().contains::<Ancestry>());
        assert!(!Acyclic::default_capabilities().contains::<Connectedness>());
    }
}
